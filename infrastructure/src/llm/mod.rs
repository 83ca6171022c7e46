//! Hosted chat-model adapter used by the model-assisted router
//!
//! Speaks the OpenAI chat-completions, Anthropic messages and Gemini
//! generateContent APIs over `reqwest`.

pub mod gateway;
pub mod protocol;
pub mod session;

pub use gateway::{HttpLlmGateway, LlmSettings};
pub use session::HttpLlmSession;
