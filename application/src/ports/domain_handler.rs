//! Domain handler port
//!
//! Every capability domain is served by one handler implementing this
//! contract. The coordinator depends only on it, never on handler internals
//! such as SQL generation or HTTP calls.

use async_trait::async_trait;
use super_agent_domain::{Domain, HandlerResult, Query};
use thiserror::Error;

/// Unexpected faults raised by a handler.
///
/// Expected bad input (an unknown city, an unparseable amount) is reported as
/// a failed [`HandlerResult`] instead.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A pluggable handler for one [`Domain`]
#[async_trait]
pub trait DomainHandler: Send + Sync {
    /// The domain this handler serves
    fn domain(&self) -> Domain;

    /// Human-readable capability descriptions, for introspection only
    fn capabilities(&self) -> Vec<String>;

    /// Execute a query and produce a result
    async fn execute(&self, query: &Query) -> Result<HandlerResult, HandlerError>;
}
