use super::{Action, Component, Counter, CounterProps, List};
use crate::view::Line;

pub const COUNTER_HEADING: &str = "Counter Component:";
pub const COUNTER_SUBHEADING: &str = "Initializing the state using properties";
pub const LIST_HEADING: &str = "List Component:";
pub const KEY_HINT: &str = "+/Space/Enter or click [+]: increment   q/Esc: quit";

/// Inputs to the root composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProps {
    pub initial_count: i64,
    pub items: Vec<String>,
    pub show_help: bool,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            initial_count: 1,
            items: Vec::new(),
            show_help: true,
        }
    }
}

/// Root composition: one counter and one list under their headings
pub struct App {
    counter: Counter,
    list: List<String>,
    show_help: bool,
}

impl App {
    pub fn new(props: AppProps) -> Self {
        Self {
            counter: Counter::new(CounterProps {
                initial_count: props.initial_count,
            }),
            list: if props.items.is_empty() {
                List::empty()
            } else {
                List::new(props.items)
            },
            show_help: props.show_help,
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn list(&self) -> &List<String> {
        &self.list
    }
}

impl Component for App {
    fn render(&self) -> Vec<Line> {
        let mut lines = vec![
            Line::heading(COUNTER_HEADING),
            Line::subheading(COUNTER_SUBHEADING),
        ];
        lines.extend(self.counter.render());
        lines.push(Line::blank());
        lines.push(Line::heading(LIST_HEADING));
        lines.extend(self.list.render());

        if self.show_help {
            lines.push(Line::blank());
            lines.push(Line::hint(KEY_HINT));
        }

        lines
    }

    fn dispatch(&mut self, action: Action) -> bool {
        self.counter.dispatch(action)
    }

    fn revision(&self) -> u64 {
        self.counter.revision() + self.list.revision()
    }
}
