//! Routing decision value object

use crate::core::domain::Domain;
use serde::Serialize;

/// The domain chosen for a query, with an optional note on why.
///
/// The rationale is for logs only; nothing downstream branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl RoutingDecision {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            rationale: None,
        }
    }

    /// Route to the default domain, recording why nothing more specific applied
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::new(Domain::DEFAULT).with_rationale(reason)
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn is_fallback(&self) -> bool {
        self.domain.is_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_targets_default_domain() {
        let decision = RoutingDecision::fallback("classifier unreachable");
        assert_eq!(decision.domain, Domain::Information);
        assert!(decision.is_fallback());
        assert_eq!(decision.rationale.as_deref(), Some("classifier unreachable"));
    }
}
