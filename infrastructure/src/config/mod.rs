//! Configuration file loading for super-agent
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SUPER_AGENT_<SECTION>__<KEY>` environment variables
//! 2. Legacy variables: `LLM_PROVIDER`, `LLM_MODEL`, `LLM_API_KEY`,
//!    `DATABASE_PATH`, `WEATHER_API_BASE_URL`, `MCP_HOST`, `MCP_PORT`
//! 3. `--config <path>` specified file
//! 4. Project root: `./super-agent.toml` or `./.super-agent.toml`
//! 5. Global: `$XDG_CONFIG_HOME/super-agent/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_WEATHER_API_URL, FileConfig, FileHandlersConfig,
    FileLlmConfig, FileOutputConfig, FileReplConfig, FileRouterConfig, FileTablesConfig,
    FileToolServerConfig,
};
pub use loader::{ConfigError, ConfigLoader};
