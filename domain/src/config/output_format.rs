//! Output format value object

use serde::{Deserialize, Serialize};

/// How a processed query is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the synthesized answer (default)
    #[default]
    Answer,
    /// Routing decision, each handler result and the answer
    Full,
    /// JSON output
    Json,
}
