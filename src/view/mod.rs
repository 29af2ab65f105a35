/// View subsystem - Independent rendering and display management
///
/// This module turns component output into terminal lines through the
/// ViewModel trait, so the renderer never depends on component internals.

pub mod renderer;
pub mod view_model;

// Re-export public interface
pub use renderer::View;
pub use view_model::{ComponentViewModel, HitRegion, Line};
