//! Presentation layer for super-agent
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg, RouterArg, RunMode};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use repl::{InteractiveRepl, is_exit_command};
