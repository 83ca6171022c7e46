//! Weather handler: current conditions from an Open-Meteo compatible API

use super::strings;
use crate::config::DEFAULT_WEATHER_API_URL;
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use super_agent_application::{DomainHandler, HandlerError};
use super_agent_domain::core::string::title_case;
use super_agent_domain::knowledge::conditions::UNKNOWN_CONDITION;
use super_agent_domain::{City, CityTable, Domain, HandlerResult, Payload, Query, WeatherConditions};
use tracing::debug;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

pub struct WeatherHandler {
    client: reqwest::Client,
    api_url: String,
    timezone: String,
    cities: CityTable,
    conditions: WeatherConditions,
}

impl WeatherHandler {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            api_url: DEFAULT_WEATHER_API_URL.to_string(),
            timezone: "America/Sao_Paulo".to_string(),
            cities: CityTable::default(),
            conditions: WeatherConditions::default(),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_cities(mut self, cities: CityTable) -> Self {
        self.cities = cities;
        self
    }

    pub fn with_conditions(mut self, conditions: WeatherConditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    /// Current weather for a city given by name
    pub async fn current_weather(&self, city: &str) -> Result<HandlerResult, HandlerError> {
        match self.cities.get(city) {
            Some(city) => self.fetch(city).await,
            None => Ok(HandlerResult::failure(
                Domain::Weather,
                format!("city '{}' is not supported", city.trim()),
            )),
        }
    }

    /// The `city` context entry wins over a city named in the text
    fn extract_city(&self, query: &Query) -> Option<&City> {
        query
            .context_str("city")
            .and_then(|name| self.cities.get(name))
            .or_else(|| self.cities.find_in(query.text()))
    }

    async fn fetch(&self, city: &City) -> Result<HandlerResult, HandlerError> {
        debug!(city = %city.name, "Fetching current weather");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("latitude", city.latitude.to_string()),
                ("longitude", city.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await
            .map_err(|e| HandlerError::RequestFailed(format!("weather request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(HandlerError::RequestFailed(format!(
                "weather API returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| HandlerError::InvalidResponse(e.to_string()))?;

        Ok(HandlerResult::success(
            Domain::Weather,
            self.payload(city, &body),
        ))
    }

    fn payload(&self, city: &City, body: &Value) -> Payload {
        let empty = Map::new();
        let current = body
            .get("current")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let field = |key: &str| current.get(key).cloned().unwrap_or(Value::Null);

        let code = field("weather_code");
        let condition = code
            .as_u64()
            .and_then(|c| u32::try_from(c).ok())
            .map(|c| self.conditions.describe(c))
            .unwrap_or(UNKNOWN_CONDITION);

        let mut payload = Payload::new();
        payload.insert("city".into(), json!(title_case(&city.name)));
        payload.insert("temperature".into(), field("temperature_2m"));
        payload.insert("humidity".into(), field("relative_humidity_2m"));
        payload.insert("wind_speed".into(), field("wind_speed_10m"));
        payload.insert("weather_code".into(), code);
        payload.insert("condition".into(), json!(condition));
        payload.insert(
            "units".into(),
            json!({"temperature": "°C", "humidity": "%", "wind_speed": "km/h"}),
        );
        payload
    }
}

#[async_trait]
impl DomainHandler for WeatherHandler {
    fn domain(&self) -> Domain {
        Domain::Weather
    }

    fn capabilities(&self) -> Vec<String> {
        let mut capabilities = strings(&[
            "Current weather conditions",
            "Temperature",
            "Humidity and wind",
        ]);
        capabilities.push(format!(
            "Supported cities: {}",
            self.cities.names().collect::<Vec<_>>().join(", ")
        ));
        capabilities
    }

    async fn execute(&self, query: &Query) -> Result<HandlerResult, HandlerError> {
        match self.extract_city(query) {
            Some(city) => self.fetch(city).await,
            None => Ok(HandlerResult::failure(
                Domain::Weather,
                "could not identify a city in the query",
            )),
        }
    }
}
