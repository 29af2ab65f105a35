use super::{Action, Component};
use crate::state::StateCell;
use crate::view::{HitRegion, Line};
use unicode_width::UnicodeWidthStr;

/// Label of the increment control
pub const INCREMENT_LABEL: &str = "[+]";

/// Properties supplied once when the counter is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterProps {
    pub initial_count: i64,
}

/// The counter's whole state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    pub count: i64,
}

pub struct Counter {
    state: StateCell<Count>,
}

impl Counter {
    pub fn new(props: CounterProps) -> Self {
        Self {
            state: StateCell::new(Count {
                count: props.initial_count,
            }),
        }
    }

    pub fn count(&self) -> i64 {
        self.state.get().count
    }

    /// Replace the state with one holding `count + 1`.
    /// Saturates at `i64::MAX`.
    pub fn increment(&mut self) {
        self.state.update(|prev| Count {
            count: prev.count.saturating_add(1),
        });
    }
}

impl Component for Counter {
    fn render(&self) -> Vec<Line> {
        let value = self.count().to_string();
        let start_col = value.width() + 1;
        let text = format!("{value} {INCREMENT_LABEL}");

        vec![Line::body(text).with_hit(HitRegion {
            start_col,
            end_col: start_col + INCREMENT_LABEL.width(),
            action: Action::Increment,
        })]
    }

    fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Increment => {
                self.increment();
                true
            }
        }
    }

    fn revision(&self) -> u64 {
        self.state.revision()
    }
}
