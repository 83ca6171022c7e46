//! WMO weather-code descriptions

use serde::{Deserialize, Serialize};

/// Description returned for codes missing from the table
pub const UNKNOWN_CONDITION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub code: u32,
    pub description: String,
}

/// Lookup table from WMO weather code to a short description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherConditions(Vec<WeatherCondition>);

impl WeatherConditions {
    pub fn new(conditions: Vec<WeatherCondition>) -> Self {
        Self(conditions)
    }

    pub fn describe(&self, code: u32) -> &str {
        self.0
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.description.as_str())
            .unwrap_or(UNKNOWN_CONDITION)
    }
}

impl Default for WeatherConditions {
    fn default() -> Self {
        let table = [
            (0, "Clear sky"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Dense drizzle"),
            (61, "Light rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (71, "Light snow"),
            (73, "Moderate snow"),
            (75, "Heavy snow"),
            (80, "Light rain showers"),
            (81, "Moderate rain showers"),
            (82, "Violent rain showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with light hail"),
            (99, "Thunderstorm with heavy hail"),
        ];
        Self(
            table
                .into_iter()
                .map(|(code, description)| WeatherCondition {
                    code,
                    description: description.to_string(),
                })
                .collect(),
        )
    }
}
