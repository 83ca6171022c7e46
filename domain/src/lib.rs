//! Domain layer for super-agent
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! Every query is classified into exactly one [`Domain`]. The keyword table
//! evaluates domains in a fixed priority order and falls back to
//! [`Domain::DEFAULT`] when nothing matches, so routing is total.
//!
//! ## Results and answers
//!
//! - **HandlerResult**: the uniform output of a domain handler (payload or error)
//! - **AnswerFormatter**: per-domain rendering of a result, with a generic fallback

pub mod answer;
pub mod config;
pub mod core;
pub mod handler;
pub mod knowledge;
pub mod prompt;
pub mod routing;
pub mod tool;

// Re-export commonly used types
pub use answer::AnswerFormatter;
pub use config::{LlmProvider, OutputFormat, RouterStrategy};
pub use core::{domain::Domain, error::DomainError, query::Query};
pub use handler::result::{HandlerOutcome, HandlerResult, Payload};
pub use knowledge::{City, CityTable, ExchangeRates, KnowledgeBase, Topic, WeatherConditions};
pub use prompt::PromptTemplate;
pub use routing::{decision::RoutingDecision, keyword::KeywordTable};
pub use tool::{
    DefaultToolValidator, ParamType, ToolCall, ToolDefinition, ToolParameter, ToolValidator,
};
