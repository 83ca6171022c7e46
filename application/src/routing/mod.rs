//! Query routing strategies
//!
//! Both strategies sit behind [`QueryRouter`] and are interchangeable. A
//! router always answers with a domain from the closed set: failures inside
//! a strategy are mapped to the default domain with an explanatory rationale.

pub mod keyword;
pub mod model;

pub use keyword::KeywordRouter;
pub use model::ModelRouter;

use async_trait::async_trait;
use super_agent_domain::{Query, RouterStrategy, RoutingDecision};

#[async_trait]
pub trait QueryRouter: Send + Sync {
    /// Which strategy this router implements
    fn strategy(&self) -> RouterStrategy;

    /// Pick the domain for a query. Never fails.
    async fn route(&self, query: &Query) -> RoutingDecision;
}
