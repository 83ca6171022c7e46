//! Handler configuration from TOML (`[handlers]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Raw handler configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHandlersConfig {
    /// Seconds a single handler call may take before "handler timeout"
    pub timeout_seconds: u64,
    /// SQLite database holding `travel_bookings`
    pub database_path: String,
    /// Open-Meteo compatible forecast endpoint
    pub weather_api_url: String,
    /// Timezone sent with weather requests
    pub weather_timezone: String,
}

impl Default for FileHandlersConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            database_path: "travel_agency.db".to_string(),
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_timezone: "America/Sao_Paulo".to_string(),
        }
    }
}
