//! Application layer for super-agent
//!
//! This crate contains use cases, port definitions, routing strategies, the
//! synthesizer and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod routing;
pub mod synthesizer;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    connection::{ConnectionError, ConnectionPort, LocalConnection},
    domain_handler::{DomainHandler, HandlerError},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
};
pub use routing::{KeywordRouter, ModelRouter, QueryRouter};
pub use synthesizer::{NO_RESULT, Synthesizer};
pub use use_cases::coordinator::{Coordinator, CoordinatorError, ProcessOutcome};
pub use use_cases::handler_registry::HandlerRegistry;
