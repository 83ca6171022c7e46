//! Deterministic keyword router

use super::QueryRouter;
use async_trait::async_trait;
use super_agent_domain::{KeywordTable, Query, RouterStrategy, RoutingDecision};
use tracing::debug;

/// Routes with a priority-ordered [`KeywordTable`]
#[derive(Debug, Clone, Default)]
pub struct KeywordRouter {
    table: KeywordTable,
}

impl KeywordRouter {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }
}

#[async_trait]
impl QueryRouter for KeywordRouter {
    fn strategy(&self) -> RouterStrategy {
        RouterStrategy::Keyword
    }

    async fn route(&self, query: &Query) -> RoutingDecision {
        let decision = self.table.classify(query);
        debug!(
            domain = %decision.domain,
            rationale = decision.rationale.as_deref().unwrap_or(""),
            "Keyword routing"
        );
        decision
    }
}
