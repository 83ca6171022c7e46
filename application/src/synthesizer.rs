//! Synthesizer: handler results to one answer string

use super_agent_domain::{AnswerFormatter, HandlerResult};

/// Returned when there is nothing to say
pub const NO_RESULT: &str = "No result available.";

/// Separator between the blocks of a multi-result answer
const BLOCK_SEPARATOR: &str = "\n\n";

/// Turns a sequence of [`HandlerResult`]s into the final answer.
///
/// Blocks keep the order of the input. Synthesis never fails and never
/// returns a blank string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, results: &[HandlerResult]) -> String {
        let blocks: Vec<String> = results
            .iter()
            .map(AnswerFormatter::format)
            .filter(|block| !block.trim().is_empty())
            .collect();

        if blocks.is_empty() {
            NO_RESULT.to_string()
        } else {
            blocks.join(BLOCK_SEPARATOR)
        }
    }
}
