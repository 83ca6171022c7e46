//! Information handler: static knowledge lookup, the catch-all domain

use super::strings;
use async_trait::async_trait;
use serde_json::json;
use super_agent_application::{DomainHandler, HandlerError};
use super_agent_domain::{Domain, HandlerResult, KnowledgeBase, Query};
use tracing::debug;

const GENERAL_ANSWER: &str =
    "I am the information assistant. I can explain the topics below in more detail.";
const SUGGESTION: &str =
    "Ask about one of these topics, or ask about the weather, bookings or finance.";

#[derive(Debug, Clone, Default)]
pub struct InformationHandler {
    knowledge: KnowledgeBase,
}

impl InformationHandler {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Answer from the knowledge base; never fails
    pub fn answer(&self, text: &str) -> HandlerResult {
        match self.knowledge.lookup(text) {
            Some(topic) => {
                debug!(topic = %topic.name, "Knowledge topic matched");
                HandlerResult::success_json(
                    Domain::Information,
                    json!({
                        "topic": topic.name,
                        "definition": topic.definition,
                        "key_concepts": topic.key_concepts,
                        "benefits": topic.benefits,
                    }),
                )
            }
            None => HandlerResult::success_json(
                Domain::Information,
                json!({
                    "definition": GENERAL_ANSWER,
                    "available_topics": self.knowledge.topic_names(),
                    "suggestion": SUGGESTION,
                }),
            ),
        }
    }
}

#[async_trait]
impl DomainHandler for InformationHandler {
    fn domain(&self) -> Domain {
        Domain::Information
    }

    fn capabilities(&self) -> Vec<String> {
        strings(&[
            "Explain technical concepts",
            "Answer general questions",
            "Describe architectures and protocols",
        ])
    }

    async fn execute(&self, query: &Query) -> Result<HandlerResult, HandlerError> {
        Ok(self.answer(query.text()))
    }
}
