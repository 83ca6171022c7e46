//! HTTP LLM Gateway implementation

use crate::config::FileLlmConfig;
use crate::llm::protocol::Sampling;
use crate::llm::session::HttpLlmSession;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use super_agent_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use super_agent_domain::LlmProvider;
use tracing::info;

/// Resolved settings for talking to one provider/model pair
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub model: String,
    pub api_key: Option<String>,
    /// Base URL without a trailing slash
    pub base_url: String,
    pub sampling: Sampling,
}

impl From<&FileLlmConfig> for LlmSettings {
    fn from(config: &FileLlmConfig) -> Self {
        Self {
            provider: config.provider,
            model: config.resolved_model(),
            api_key: config.api_key().map(str::to_string),
            base_url: config.resolved_base_url(),
            sampling: Sampling {
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
        }
    }
}

/// LLM Gateway implementation for OpenAI, Anthropic and Gemini HTTP APIs
pub struct HttpLlmGateway {
    client: reqwest::Client,
    settings: Arc<LlmSettings>,
}

impl HttpLlmGateway {
    pub fn new(client: reqwest::Client, settings: LlmSettings) -> Self {
        info!(
            "HttpLlmGateway initialized ({} / {})",
            settings.provider, settings.model
        );
        Self {
            client,
            settings: Arc::new(settings),
        }
    }

    /// Build a gateway with its own client and a per-request timeout
    pub fn from_config(config: &FileLlmConfig, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self::new(client, LlmSettings::from(config)))
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(HttpLlmSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            system_prompt,
        )))
    }
}
