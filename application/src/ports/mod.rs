//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod connection;
pub mod domain_handler;
pub mod llm_gateway;
pub mod progress;
