//! Tool call errors

use super_agent_application::ports::domain_handler::HandlerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool server session is not connected")]
    NotConnected,

    #[error(transparent)]
    Handler(#[from] HandlerError),
}
