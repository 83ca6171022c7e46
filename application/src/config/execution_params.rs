//! Execution parameters: per-query time bounds.
//!
//! [`ExecutionParams`] groups the static parameters read once when the
//! [`Coordinator`](crate::use_cases::coordinator::Coordinator) is built.
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time bounds for the two suspension points of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum time a domain handler may run before "handler timeout".
    pub handler_timeout: Duration,
    /// Maximum time the model-assisted router waits for a classification.
    pub classifier_timeout: Duration,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            handler_timeout: Duration::from_secs(30),
            classifier_timeout: Duration::from_secs(10),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_handler_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = timeout;
        self
    }

    pub fn with_classifier_timeout(mut self, timeout: Duration) -> Self {
        self.classifier_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ExecutionParams::default();
        assert_eq!(params.handler_timeout, Duration::from_secs(30));
        assert_eq!(params.classifier_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default()
            .with_handler_timeout(Duration::from_millis(250))
            .with_classifier_timeout(Duration::from_secs(2));

        assert_eq!(params.handler_timeout, Duration::from_millis(250));
        assert_eq!(params.classifier_timeout, Duration::from_secs(2));
    }
}
