//! Router strategy value object

use serde::{Deserialize, Serialize};

/// Which classifier picks the domain for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterStrategy {
    /// Deterministic, priority-ordered keyword matching (default)
    #[default]
    Keyword,
    /// Ask a language model, validating its answer against the domain set
    Model,
}

impl RouterStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterStrategy::Keyword => "keyword",
            RouterStrategy::Model => "model",
        }
    }
}

impl std::fmt::Display for RouterStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RouterStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" | "keywords" => Ok(RouterStrategy::Keyword),
            "model" | "llm" => Ok(RouterStrategy::Model),
            other => Err(format!("unknown router strategy: {}", other)),
        }
    }
}
