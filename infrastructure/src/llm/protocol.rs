//! Request and response shapes for the supported chat APIs
//!
//! Each provider gets a request builder returning a JSON body and a parser
//! that pulls the reply text out of the provider's response document.

use serde::{Deserialize, Serialize};
use super_agent_domain::LlmProvider;

/// Header carrying the Anthropic API version
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Generation settings shared by every provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

// ==================== OpenAI ====================

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReply,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub content: Option<String>,
}

// ==================== Anthropic ====================

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub system: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

// ==================== Google ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent<'a>>,
    pub contents: Vec<GeminiContent<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GeminiPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Path (relative to the base URL) of the completion endpoint
pub fn endpoint_path(provider: LlmProvider, model: &str) -> String {
    match provider {
        LlmProvider::OpenAi => "/chat/completions".to_string(),
        LlmProvider::Anthropic => "/messages".to_string(),
        LlmProvider::Google => format!("/models/{}:generateContent", model),
    }
}

/// Build the JSON body for one system + user exchange
pub fn request_body(
    provider: LlmProvider,
    model: &str,
    system_prompt: &str,
    content: &str,
    sampling: Sampling,
) -> serde_json::Result<serde_json::Value> {
    match provider {
        LlmProvider::OpenAi => {
            let mut messages = Vec::with_capacity(2);
            if !system_prompt.is_empty() {
                messages.push(ChatMessage {
                    role: "system",
                    content: system_prompt,
                });
            }
            messages.push(ChatMessage {
                role: "user",
                content,
            });
            serde_json::to_value(ChatCompletionRequest {
                model,
                messages,
                temperature: sampling.temperature,
                max_tokens: sampling.max_tokens,
            })
        }
        LlmProvider::Anthropic => serde_json::to_value(MessagesRequest {
            model,
            system: system_prompt,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        }),
        LlmProvider::Google => serde_json::to_value(GenerateContentRequest {
            system_instruction: (!system_prompt.is_empty()).then(|| GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: system_prompt,
                }],
            }),
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart { text: content }],
            }],
            generation_config: GenerationConfig {
                temperature: sampling.temperature,
                max_output_tokens: sampling.max_tokens,
            },
        }),
    }
}

/// Extract the reply text from a provider response body.
///
/// Returns `None` when the document has no text in the expected place.
pub fn reply_text(provider: LlmProvider, body: &str) -> serde_json::Result<Option<String>> {
    let text = match provider {
        LlmProvider::OpenAi => {
            let response: ChatCompletionResponse = serde_json::from_str(body)?;
            response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
        }
        LlmProvider::Anthropic => {
            let response: MessagesResponse = serde_json::from_str(body)?;
            let text: String = response
                .content
                .into_iter()
                .filter(|block| block.kind == "text")
                .filter_map(|block| block.text)
                .collect();
            Some(text)
        }
        LlmProvider::Google => {
            let response: GenerateContentResponse = serde_json::from_str(body)?;
            response.candidates.into_iter().next().map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
        }
    };
    Ok(text.filter(|t| !t.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLING: Sampling = Sampling {
        temperature: 0.0,
        max_tokens: 64,
    };

    #[test]
    fn test_openai_body() {
        let body = request_body(LlmProvider::OpenAi, "gpt-4o-mini", "sys", "hi", SAMPLING).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"},
                ],
                "temperature": 0.0,
                "max_tokens": 64,
            })
        );
    }

    #[test]
    fn test_anthropic_body_puts_system_at_top_level() {
        let body = request_body(LlmProvider::Anthropic, "claude", "sys", "hi", SAMPLING).unwrap();
        assert_eq!(body["system"], "sys");
        assert_eq!(body["messages"], json!([{"role": "user", "content": "hi"}]));
        assert_eq!(body["max_tokens"], 64);

        let no_system = request_body(LlmProvider::Anthropic, "claude", "", "hi", SAMPLING).unwrap();
        assert!(no_system.get("system").is_none());
    }

    #[test]
    fn test_google_body() {
        let body = request_body(LlmProvider::Google, "gemini", "sys", "hi", SAMPLING).unwrap();
        assert_eq!(body["systemInstruction"], json!({"parts": [{"text": "sys"}]}));
        assert_eq!(
            body["contents"],
            json!([{"role": "user", "parts": [{"text": "hi"}]}])
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 64);
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoint_path(LlmProvider::OpenAi, "m"), "/chat/completions");
        assert_eq!(endpoint_path(LlmProvider::Anthropic, "m"), "/messages");
        assert_eq!(
            endpoint_path(LlmProvider::Google, "gemini-1.5-flash"),
            "/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_reply_text_per_provider() {
        let openai = r#"{"choices":[{"message":{"role":"assistant","content":"weather"}}]}"#;
        assert_eq!(
            reply_text(LlmProvider::OpenAi, openai).unwrap().as_deref(),
            Some("weather")
        );

        let anthropic = r#"{"content":[{"type":"text","text":"finance"}],"stop_reason":"end_turn"}"#;
        assert_eq!(
            reply_text(LlmProvider::Anthropic, anthropic).unwrap().as_deref(),
            Some("finance")
        );

        let google = r#"{"candidates":[{"content":{"parts":[{"text":"data"}],"role":"model"}}]}"#;
        assert_eq!(
            reply_text(LlmProvider::Google, google).unwrap().as_deref(),
            Some("data")
        );
    }

    #[test]
    fn test_reply_text_missing_or_malformed() {
        assert_eq!(reply_text(LlmProvider::OpenAi, r#"{"choices":[]}"#).unwrap(), None);
        assert_eq!(
            reply_text(LlmProvider::Anthropic, r#"{"content":[{"type":"text","text":"  "}]}"#)
                .unwrap(),
            None
        );
        assert!(reply_text(LlmProvider::Google, "not json").is_err());
    }
}
