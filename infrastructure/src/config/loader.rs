//! Configuration loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "super-agent";
const PROJECT_FILES: [&str; 2] = ["super-agent.toml", ".super-agent.toml"];
const ENV_PREFIX: &str = "SUPER_AGENT_";

/// Unprefixed environment variables understood for compatibility, with the
/// config key each one sets
const LEGACY_ENV: [(&str, &str); 7] = [
    ("LLM_PROVIDER", "llm.provider"),
    ("LLM_MODEL", "llm.model"),
    ("LLM_API_KEY", "llm.api_key"),
    ("DATABASE_PATH", "handlers.database_path"),
    ("WEATHER_API_BASE_URL", "handlers.weather_api_url"),
    ("MCP_HOST", "tool_server.host"),
    ("MCP_PORT", "tool_server.port"),
];

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SUPER_AGENT_<SECTION>__<KEY>` environment variables
    /// 2. Legacy environment variables (`LLM_API_KEY`, `DATABASE_PATH`, ...)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./super-agent.toml` or `./.super-agent.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/super-agent/config.toml`
    /// 6. Default values
    ///
    /// The merged result is validated before it is returned.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let config = Self::figment(config_path).extract().map_err(Box::new)?;
        Self::validated(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Build the provider chain without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Merging project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validated(config: FileConfig) -> Result<FileConfig, ConfigError> {
        config.validate()?;
        Ok(config)
    }

    fn legacy_env() -> Env {
        let names: Vec<&str> = LEGACY_ENV.iter().map(|(name, _)| *name).collect();
        Env::raw().only(&names).map(|name| {
            LEGACY_ENV
                .iter()
                .find(|(legacy, _)| name.as_str().eq_ignore_ascii_case(legacy))
                .map(|(_, key)| (*key).into())
                .unwrap_or_else(|| name.as_str().to_owned().into())
        })
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/super-agent/config.toml` (or the platform
    /// equivalent)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources being used (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!(
            "  [env  ] {}<SECTION>__<KEY>, then {}",
            ENV_PREFIX,
            LEGACY_ENV
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        ));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{:<5}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use super_agent_domain::{LlmProvider, RouterStrategy};

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.router.strategy, RouterStrategy::Keyword);
        assert_eq!(config.tool_server.port, 8000);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("super-agent"));
    }

    #[test]
    fn test_project_file_and_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "super-agent.toml",
                r#"
[handlers]
timeout_seconds = 7
database_path = "project.db"
"#,
            )?;
            jail.create_file(
                "explicit.toml",
                r#"
[handlers]
database_path = "explicit.db"
"#,
            )?;

            let config = ConfigLoader::load(Some(Path::new("explicit.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.handlers.timeout_seconds, 7);
            assert_eq!(config.handlers.database_path, "explicit.db");
            Ok(())
        });
    }

    #[test]
    fn test_legacy_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ".super-agent.toml",
                r#"
[tool_server]
port = 9100
"#,
            )?;
            jail.set_env("MCP_PORT", "9200");
            jail.set_env("LLM_PROVIDER", "anthropic");
            jail.set_env("DATABASE_PATH", "env.db");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.tool_server.port, 9200);
            assert_eq!(config.llm.provider, LlmProvider::Anthropic);
            assert_eq!(config.handlers.database_path, "env.db");
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_beats_legacy_env() {
        Jail::expect_with(|jail| {
            jail.set_env("LLM_MODEL", "legacy-model");
            jail.set_env("SUPER_AGENT_LLM__MODEL", "prefixed-model");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.llm.resolved_model(), "prefixed-model");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("SUPER_AGENT_ROUTER__STRATEGY", "model");

            let err = ConfigLoader::load(None).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid(ConfigValidationError::MissingApiKey(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_mentions_env() {
        let lines = ConfigLoader::describe_sources(None);
        assert!(lines.iter().any(|l| l.contains("SUPER_AGENT_")));
        assert!(lines.iter().any(|l| l.contains("built-in defaults")));
    }
}
