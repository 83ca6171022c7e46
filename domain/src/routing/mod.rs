//! Routing domain
//!
//! - [`decision::RoutingDecision`]: the chosen domain plus an optional rationale
//! - [`keyword::KeywordTable`]: deterministic, priority-ordered keyword rules

pub mod decision;
pub mod keyword;
