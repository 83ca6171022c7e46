//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod handlers;
mod llm;
mod output;
mod repl;
mod router;
mod tables;
mod tool_server;

pub use handlers::{DEFAULT_WEATHER_API_URL, FileHandlersConfig};
pub use llm::FileLlmConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use router::FileRouterConfig;
pub use tables::FileTablesConfig;
pub use tool_server::FileToolServerConfig;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use super_agent_application::ExecutionParams;
use super_agent_domain::{LlmProvider, RouterStrategy};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("the model router needs an API key for provider '{0}' (set llm.api_key or LLM_API_KEY)")]
    MissingApiKey(LlmProvider),

    #[error("llm.temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("tool_server.port cannot be 0 when probing is enabled")]
    InvalidPort,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Routing strategy
    pub router: FileRouterConfig,
    /// LLM provider for the model-assisted router
    pub llm: FileLlmConfig,
    /// Domain handler settings
    pub handlers: FileHandlersConfig,
    /// Tool server endpoint (the coordinator's connection resource)
    pub tool_server: FileToolServerConfig,
    /// Knowledge table overrides
    pub tables: FileTablesConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.handlers.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout(
                "handlers.timeout_seconds",
            ));
        }
        if self.router.classifier_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout(
                "router.classifier_timeout_seconds",
            ));
        }
        if self.tool_server.connect_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout(
                "tool_server.connect_timeout_seconds",
            ));
        }

        if let Some(model) = &self.llm.model
            && model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(
                self.llm.temperature,
            ));
        }

        if self.router.strategy == RouterStrategy::Model && self.llm.api_key().is_none() {
            return Err(ConfigValidationError::MissingApiKey(self.llm.provider));
        }

        if self.tool_server.probe && self.tool_server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        Ok(())
    }

    /// Effective configuration as TOML, with the API key masked
    pub fn to_toml_redacted(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.llm.api_key.is_some() {
            shown.llm.api_key = Some("********".to_string());
        }
        toml::to_string_pretty(&shown)
    }

    /// Time bounds for the coordinator
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_handler_timeout(Duration::from_secs(self.handlers.timeout_seconds))
            .with_classifier_timeout(Duration::from_secs(
                self.router.classifier_timeout_seconds,
            ))
    }
}
