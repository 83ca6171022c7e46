//! Tool domain module
//!
//! Definitions of the remotely callable tools that front the domain
//! handlers, and the pure validation applied to incoming calls before any
//! handler runs.
//!
//! ```text
//! ToolCall ──▶ ToolValidator (presence, unknown names, JSON types)
//!          ──▶ tool server (ranges) ──▶ handler ──▶ HandlerResult (JSON)
//! ```

pub mod catalog;
pub mod entities;
pub mod validation;

pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter};
pub use validation::{DefaultToolValidator, ToolValidator};
