//! LLM provider configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};
use super_agent_domain::LlmProvider;

/// Raw LLM configuration from TOML, used only by the model-assisted router
///
/// # Example
///
/// ```toml
/// [llm]
/// provider = "anthropic"
/// model = "claude-3-5-haiku-latest"
/// api_key = "sk-..."          # or LLM_API_KEY / SUPER_AGENT_LLM__API_KEY
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    pub provider: LlmProvider,
    /// Model name; the provider's default when unset
    pub model: Option<String>,
    pub api_key: Option<String>,
    /// Override of the provider's API base URL
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAi,
            model: None,
            api_key: None,
            base_url: None,
            temperature: 0.0,
            max_tokens: 64,
        }
    }
}

impl FileLlmConfig {
    pub fn resolved_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(self.provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// The API key, if one is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_defaults() {
        let config = FileLlmConfig::default();
        assert_eq!(config.resolved_model(), "gpt-4o-mini");
        assert_eq!(config.resolved_base_url(), "https://api.openai.com/v1");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = FileLlmConfig {
            provider: LlmProvider::Anthropic,
            model: Some("claude-sonnet-4-5".to_string()),
            base_url: Some("http://localhost:8080/".to_string()),
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_model(), "claude-sonnet-4-5");
        assert_eq!(config.resolved_base_url(), "http://localhost:8080");
        assert!(config.api_key().is_none());
    }
}
