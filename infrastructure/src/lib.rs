//! Infrastructure layer for super-agent
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the four domain handlers, the HTTP LLM
//! gateway, the tool server session and configuration file loading.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod tool_server;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, ConfigValidationError, FileConfig};
pub use handlers::{DataHandler, FinanceHandler, InformationHandler, WeatherHandler};
pub use llm::{HttpLlmGateway, HttpLlmSession, LlmSettings};
pub use tool_server::{ToolCallError, ToolServer, ToolServerSession};
