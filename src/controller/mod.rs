/// Controller subsystem - Handles all user input and drives the render loop
///
/// This module owns the terminal session and routes key and mouse events to
/// component actions, keeping interaction logic apart from components and view.

pub mod app_controller;
pub mod key_handler;

// Re-export public interface
pub use app_controller::AppController;
