//! Command Line Interface for the Vitrine filtering engine.

pub mod args;
pub mod commands;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
