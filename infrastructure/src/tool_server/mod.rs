//! Tool server: the domain handlers exposed as named, validated tools

pub mod error;
pub mod server;
pub mod session;

pub use error::ToolCallError;
pub use server::ToolServer;
pub use session::{Probe, ToolServerSession};
