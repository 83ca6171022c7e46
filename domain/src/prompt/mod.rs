//! Prompt domain
//!
//! Templates for the model-assisted classification step.

mod template;

pub use template::PromptTemplate;
