//! Router configuration from TOML (`[router]` section)

use serde::{Deserialize, Serialize};
use super_agent_domain::RouterStrategy;

/// Raw router configuration from TOML
///
/// # Example
///
/// ```toml
/// [router]
/// strategy = "model"              # "keyword" (default) or "model"
/// classifier_timeout_seconds = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    pub strategy: RouterStrategy,
    /// Seconds the model-assisted router waits before falling back
    pub classifier_timeout_seconds: u64,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            strategy: RouterStrategy::Keyword,
            classifier_timeout_seconds: 10,
        }
    }
}
