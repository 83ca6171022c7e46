//! Tool-server session: the coordinator's connection resource.
//!
//! [`ToolServerSession`] implements [`ConnectionPort`]. Connecting optionally
//! probes the configured `host:port` over TCP; tool listing and tool calls
//! are only served while connected.

use super::error::ToolCallError;
use super::server::ToolServer;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use super_agent_application::ports::connection::{ConnectionError, ConnectionPort};
use super_agent_domain::{ToolCall, ToolDefinition};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

/// Endpoint checked on connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub endpoint: String,
    pub timeout: Duration,
}

pub struct ToolServerSession {
    server: Arc<ToolServer>,
    probe: Option<Probe>,
    connected: AtomicBool,
}

impl ToolServerSession {
    /// In-process session with no endpoint to check
    pub fn new(server: Arc<ToolServer>) -> Self {
        Self {
            server,
            probe: None,
            connected: AtomicBool::new(false),
        }
    }

    pub fn with_probe(mut self, endpoint: impl Into<String>, timeout: Duration) -> Self {
        self.probe = Some(Probe {
            endpoint: endpoint.into(),
            timeout,
        });
        self
    }

    pub fn server(&self) -> &Arc<ToolServer> {
        &self.server
    }

    pub fn list_tools(&self) -> Result<Vec<&ToolDefinition>, ToolCallError> {
        self.ensure_connected()?;
        Ok(self.server.list_tools())
    }

    pub async fn call_tool(&self, call: &ToolCall) -> Result<Value, ToolCallError> {
        self.ensure_connected()?;
        self.server.call_tool(call).await
    }

    fn ensure_connected(&self) -> Result<(), ToolCallError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(ToolCallError::NotConnected)
        }
    }

    async fn run_probe(probe: &Probe) -> Result<(), ConnectionError> {
        debug!("Probing tool server at {}", probe.endpoint);
        match tokio::time::timeout(probe.timeout, TcpStream::connect(&probe.endpoint)).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(ConnectionError::Unreachable {
                endpoint: probe.endpoint.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Err(ConnectionError::Timeout(probe.endpoint.clone())),
        }
    }
}

#[async_trait]
impl ConnectionPort for ToolServerSession {
    fn describe(&self) -> String {
        match &self.probe {
            Some(probe) => format!("tool server at {}", probe.endpoint),
            None => "in-process tool server".to_string(),
        }
    }

    async fn connect(&self) -> Result<(), ConnectionError> {
        if self.is_connected() {
            return Ok(());
        }
        if let Some(probe) = &self.probe
            && let Err(e) = Self::run_probe(probe).await
        {
            warn!("Tool server probe failed: {}", e);
            return Err(e);
        }
        self.connected.store(true, Ordering::SeqCst);
        info!("Connected to {}", self.describe());
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ConnectionError> {
        if self.connected.swap(false, Ordering::SeqCst) {
            info!("Disconnected from {}", self.describe());
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
