/// Component subsystem - Self-contained UI units with their own local state
///
/// Components know nothing about the terminal. They describe themselves as
/// lines for the view layer and react to actions routed by the controller.

pub mod app;
pub mod counter;
pub mod list;

use crate::view::Line;

// Re-export public interface
pub use app::{App, AppProps};
pub use counter::{Counter, CounterProps};
pub use list::List;

/// User-triggered actions a component may respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
}

/// Trait that all components must implement
pub trait Component {
    /// Describe the component as screen lines
    fn render(&self) -> Vec<Line>;

    /// Handle an action; returns true if the component's state was replaced
    fn dispatch(&mut self, _action: Action) -> bool {
        false
    }

    /// Sum of state replacements so far, used to detect pending re-renders
    fn revision(&self) -> u64 {
        0
    }
}
