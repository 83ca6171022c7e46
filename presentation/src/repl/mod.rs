//! Interactive session
//!
//! Provides a line-editor based loop that answers one query per line.

mod interactive;

pub use interactive::{InteractiveRepl, is_exit_command};
