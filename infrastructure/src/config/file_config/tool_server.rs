//! Tool server configuration from TOML (`[tool_server]` section)

use serde::{Deserialize, Serialize};

/// Raw tool server configuration from TOML
///
/// When `probe` is true, starting the coordinator checks that
/// `host:port` accepts TCP connections and fails otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolServerConfig {
    pub host: String,
    pub port: u16,
    pub probe: bool,
    pub connect_timeout_seconds: u64,
}

impl Default for FileToolServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            probe: false,
            connect_timeout_seconds: 5,
        }
    }
}

impl FileToolServerConfig {
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
