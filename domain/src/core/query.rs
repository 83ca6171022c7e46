//! Query value object

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A free-text query plus optional structured context (Value Object)
///
/// Queries are never rejected here: an empty or blank query is valid and
/// simply routes to the default domain. Domain-specific parsing belongs to
/// each handler.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Query {
    text: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    context: HashMap<String, Value>,
}

impl Query {
    /// Create a new query without context
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: HashMap::new(),
        }
    }

    /// Attach a context entry, replacing any previous value for `key`
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Get the raw query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased, trimmed text used for keyword matching
    pub fn normalized(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn context(&self) -> &HashMap<String, Value> {
        &self.context
    }

    /// Get a string-valued context entry
    pub fn context_str(&self, key: &str) -> Option<&str> {
        self.context.get(key).and_then(Value::as_str)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::new("Como está o clima em São Paulo?");
        assert_eq!(q.text(), "Como está o clima em São Paulo?");
        assert!(q.context().is_empty());
    }

    #[test]
    fn test_normalized_lowercases_unicode() {
        let q: Query = "  Taxa de CÂMBIO  ".into();
        assert_eq!(q.normalized(), "taxa de câmbio");
    }

    #[test]
    fn test_blank_queries_are_valid() {
        assert!(Query::new("").is_blank());
        assert!(Query::new(" \t\n").is_blank());
        assert!(!Query::new("q").is_blank());
    }

    #[test]
    fn test_context_keys_are_unique() {
        let q = Query::new("clima")
            .with_context("city", "Recife")
            .with_context("city", "Manaus");
        assert_eq!(q.context().len(), 1);
        assert_eq!(q.context_str("city"), Some("Manaus"));
        assert_eq!(q.context_str("missing"), None);
    }
}
