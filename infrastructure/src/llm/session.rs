//! A single conversation with a hosted chat model.
//!
//! [`HttpLlmSession`] implements [`LlmSession`]. The HTTP exchange is
//! stateless, so a session only remembers its system prompt and sends it
//! along with every message.

use crate::llm::gateway::LlmSettings;
use crate::llm::protocol::{self, ANTHROPIC_VERSION};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use super_agent_application::ports::llm_gateway::{GatewayError, LlmSession};
use super_agent_domain::LlmProvider;
use tracing::debug;

pub struct HttpLlmSession {
    client: reqwest::Client,
    settings: Arc<LlmSettings>,
    system_prompt: String,
}

impl HttpLlmSession {
    pub fn new(
        client: reqwest::Client,
        settings: Arc<LlmSettings>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            client,
            settings,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn request(&self, body: &serde_json::Value) -> reqwest::RequestBuilder {
        let settings = &self.settings;
        let url = format!(
            "{}{}",
            settings.base_url,
            protocol::endpoint_path(settings.provider, &settings.model)
        );
        let builder = self.client.post(url).json(body);
        let Some(key) = settings.api_key.as_deref() else {
            return builder;
        };
        match settings.provider {
            LlmProvider::OpenAi => builder.bearer_auth(key),
            LlmProvider::Anthropic => builder
                .header("x-api-key", key)
                .header("anthropic-version", ANTHROPIC_VERSION),
            LlmProvider::Google => builder.query(&[("key", key)]),
        }
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

fn status_error(status: StatusCode, model: &str, body: &str) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::AuthenticationFailed(format!("{}: {}", status, body))
        }
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(model.to_string()),
        _ => GatewayError::RequestFailed(format!("{}: {}", status, body)),
    }
}

#[async_trait]
impl LlmSession for HttpLlmSession {
    fn model(&self) -> &str {
        &self.settings.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let settings = &self.settings;
        debug!(
            "Sending {} chars to {} ({})",
            content.len(),
            settings.model,
            settings.provider
        );

        let body = protocol::request_body(
            settings.provider,
            &settings.model,
            &self.system_prompt,
            content,
            settings.sampling,
        )
        .map_err(|e| GatewayError::Other(e.to_string()))?;

        let response = self
            .request(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(status_error(status, &settings.model, &text));
        }

        let reply = protocol::reply_text(settings.provider, &text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?
            .ok_or_else(|| GatewayError::InvalidResponse("response contained no text".into()))?;

        debug!("Received {} chars from {}", reply.len(), settings.model);
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::protocol::Sampling;
    use crate::test_support::serve_once;

    fn settings(provider: LlmProvider, base_url: String) -> Arc<LlmSettings> {
        Arc::new(LlmSettings {
            provider,
            model: "test-model".to_string(),
            api_key: Some("secret".to_string()),
            base_url,
            sampling: Sampling {
                temperature: 0.0,
                max_tokens: 16,
            },
        })
    }

    #[tokio::test]
    async fn test_openai_exchange() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"finance"}}]}"#,
        )
        .await;
        let session = HttpLlmSession::new(
            reqwest::Client::new(),
            settings(LlmProvider::OpenAi, url),
            "classify",
        );

        assert_eq!(session.send("taxa de câmbio").await.unwrap(), "finance");
        assert_eq!(session.model(), "test-model");

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer secret"));
    }

    #[tokio::test]
    async fn test_anthropic_headers() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"content":[{"type":"text","text":"weather"}]}"#,
        )
        .await;
        let session = HttpLlmSession::new(
            reqwest::Client::new(),
            settings(LlmProvider::Anthropic, url),
            "classify",
        );

        assert_eq!(session.send("clima").await.unwrap(), "weather");

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /messages"));
        assert!(request.contains("x-api-key: secret"));
        assert!(request.contains("anthropic-version: 2023-06-01"));
    }

    #[tokio::test]
    async fn test_google_key_in_query() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"data"}]}}]}"#,
        )
        .await;
        let session = HttpLlmSession::new(
            reqwest::Client::new(),
            settings(LlmProvider::Google, url),
            "classify",
        );

        assert_eq!(session.send("reservas").await.unwrap(), "data");
        let request = request.await.unwrap();
        assert!(request.starts_with("POST /models/test-model:generateContent?key=secret"));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_failed() {
        let (url, _request) = serve_once("401 Unauthorized", r#"{"error":"bad key"}"#).await;
        let session = HttpLlmSession::new(
            reqwest::Client::new(),
            settings(LlmProvider::OpenAi, url),
            "",
        );

        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_empty_reply_is_invalid_response() {
        let (url, _request) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let session = HttpLlmSession::new(
            reqwest::Client::new(),
            settings(LlmProvider::OpenAi, url),
            "",
        );

        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[test]
    fn test_not_found_maps_to_model_not_available() {
        let err = status_error(StatusCode::NOT_FOUND, "gpt-x", "");
        assert!(matches!(err, GatewayError::ModelNotAvailable(m) if m == "gpt-x"));
    }
}
