//! Knowledge table overrides from TOML (`[tables]` section)

use serde::{Deserialize, Serialize};
use super_agent_domain::knowledge::{
    City, CityTable, ExchangeRates, KnowledgeBase, WeatherCondition, WeatherConditions,
};

/// Optional replacements for the built-in tables
///
/// # Example
///
/// ```toml
/// [tables.exchange_rates]
/// USD = { BRL = 5.1, EUR = 0.9 }
///
/// [[tables.cities]]
/// name = "lisboa"
/// latitude = 38.72
/// longitude = -9.14
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTablesConfig {
    pub exchange_rates: Option<ExchangeRates>,
    pub cities: Option<Vec<City>>,
    pub weather_codes: Option<Vec<WeatherCondition>>,
    pub topics: Option<KnowledgeBase>,
}

impl FileTablesConfig {
    pub fn exchange_rates(&self) -> ExchangeRates {
        self.exchange_rates.clone().unwrap_or_default()
    }

    pub fn cities(&self) -> CityTable {
        self.cities
            .clone()
            .map(CityTable::new)
            .unwrap_or_default()
    }

    pub fn weather_conditions(&self) -> WeatherConditions {
        self.weather_codes
            .clone()
            .map(WeatherConditions::new)
            .unwrap_or_default()
    }

    pub fn knowledge_base(&self) -> KnowledgeBase {
        self.topics.clone().unwrap_or_default()
    }
}
