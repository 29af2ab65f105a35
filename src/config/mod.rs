/// Configuration subsystem - Startup settings and preferences
///
/// This module handles loading configuration from .counterrc files, which
/// seed the root composition before command-line overrides are applied.

pub mod rc;

// Re-export public interface
pub use rc::RcLoader;
