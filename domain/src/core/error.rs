//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Invalid routing table: {0}")]
    InvalidRoutingTable(String),
}
