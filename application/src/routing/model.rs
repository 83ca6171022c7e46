//! Model-assisted router
//!
//! Asks a language model which domain fits the query. The reply is advisory
//! text: it is normalized and must parse to a member of the closed domain
//! set before it is used. Errors, timeouts and invalid replies all resolve
//! to the default domain.

use super::QueryRouter;
use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use super_agent_domain::{Domain, PromptTemplate, Query, RouterStrategy, RoutingDecision};
use tracing::{debug, warn};

pub struct ModelRouter {
    gateway: Arc<dyn LlmGateway>,
    timeout: Duration,
}

impl ModelRouter {
    pub fn new(gateway: Arc<dyn LlmGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Parse a classifier reply into a domain.
    ///
    /// Only the first word counts; surrounding quotes and punctuation are
    /// stripped before the membership check.
    pub fn parse_reply(reply: &str) -> Option<Domain> {
        let word = reply.split_whitespace().next()?;
        let word = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '_');
        word.parse().ok()
    }
}

#[async_trait]
impl QueryRouter for ModelRouter {
    fn strategy(&self) -> RouterStrategy {
        RouterStrategy::Model
    }

    async fn route(&self, query: &Query) -> RoutingDecision {
        if query.is_blank() {
            return RoutingDecision::new(Domain::DEFAULT).with_rationale("empty query");
        }

        let prompt = PromptTemplate::classifier_prompt(query.text());
        let call = self
            .gateway
            .complete(PromptTemplate::classifier_system(), &prompt);

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(reply)) => match Self::parse_reply(&reply) {
                Some(domain) => {
                    debug!(domain = %domain, "Model routing");
                    RoutingDecision::new(domain).with_rationale("classified by model")
                }
                None => {
                    warn!(reply = %reply.trim(), "Classifier returned an unknown domain");
                    RoutingDecision::fallback(format!(
                        "invalid classifier output '{}'",
                        reply.trim()
                    ))
                }
            },
            Ok(Err(e)) => {
                warn!("Classifier failed: {}", e);
                RoutingDecision::fallback(format!("classifier unavailable: {}", e))
            }
            Err(_) => {
                warn!("Classifier timed out after {:?}", self.timeout);
                RoutingDecision::fallback("classifier timeout")
            }
        }
    }
}
