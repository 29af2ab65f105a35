/// State subsystem - Reactive state primitive shared by all components
///
/// A component owns its state through a `StateCell`, which only ever changes
/// by replacing the held value with one derived from the previous value.

pub mod cell;

// Re-export public interface
pub use cell::StateCell;
