//! Core domain concepts shared across all subdomains.
//!
//! - [`domain::Domain`]: the closed set of capability domains
//! - [`query::Query`]: a user query with optional context
//! - [`error::DomainError`]: domain-level errors

pub mod domain;
pub mod error;
pub mod query;
pub mod string;
