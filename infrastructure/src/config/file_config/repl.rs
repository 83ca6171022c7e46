//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while a query runs
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Prompt shown before each line
    pub prompt: String,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            prompt: "super-agent".to_string(),
        }
    }
}
