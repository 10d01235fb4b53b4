//! Presentation layer for task-dispatch
//!
//! This crate contains the CLI definitions and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
