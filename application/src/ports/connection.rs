//! Connection resource port
//!
//! The external resource the coordinator acquires on `start` and releases on
//! `stop` (for example a remote tool-serving session). It has a two-phase
//! lifecycle: connected or disconnected.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors raised while acquiring or releasing the connection resource
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Cannot reach {endpoint}: {reason}")]
    Unreachable { endpoint: String, reason: String },

    #[error("Timed out connecting to {0}")]
    Timeout(String),

    #[error("Not connected")]
    NotConnected,

    #[error("Other error: {0}")]
    Other(String),
}

#[async_trait]
pub trait ConnectionPort: Send + Sync {
    /// Short description of the resource, used in logs
    fn describe(&self) -> String;

    /// Acquire the resource. Calling it while connected is a no-op.
    async fn connect(&self) -> Result<(), ConnectionError>;

    /// Release the resource. Calling it while disconnected is a no-op.
    async fn disconnect(&self) -> Result<(), ConnectionError>;

    fn is_connected(&self) -> bool;
}

/// In-process resource with no external endpoint
#[derive(Debug, Default)]
pub struct LocalConnection {
    connected: AtomicBool,
}

impl LocalConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionPort for LocalConnection {
    fn describe(&self) -> String {
        "local".to_string()
    }

    async fn connect(&self) -> Result<(), ConnectionError> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ConnectionError> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_connection_lifecycle() {
        let conn = LocalConnection::new();
        assert!(!conn.is_connected());

        conn.disconnect().await.unwrap();
        assert!(!conn.is_connected());

        conn.connect().await.unwrap();
        conn.connect().await.unwrap();
        assert!(conn.is_connected());

        conn.disconnect().await.unwrap();
        assert!(!conn.is_connected());
    }
}
