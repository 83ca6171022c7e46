//! Remote-callable tools in front of the domain handlers.
//!
//! [`ToolServer`] owns the tool catalogue and dispatches a validated
//! [`ToolCall`] to the handler capability it names.
//!
//! # Call Path
//!
//! ```text
//! call_tool(call)
//!   ├─ lookup definition       → UnknownTool
//!   ├─ DefaultToolValidator    → InvalidArguments (presence, unknown, JSON type)
//!   ├─ range checks            → InvalidArguments (amounts, codes, periods)
//!   └─ handler                 → HandlerResult as JSON
//! ```

use super::error::ToolCallError;
use crate::handlers::finance::MAX_PERIODS;
use crate::handlers::{DataHandler, FinanceHandler, WeatherHandler};
use serde_json::Value;
use std::sync::Arc;
use super_agent_domain::tool::catalog::{
    self, CALCULATE_INTEREST, CONVERT_CURRENCY, GET_EXCHANGE_RATE, GET_WEATHER, QUERY_DATABASE,
};
use super_agent_domain::{
    DefaultToolValidator, Domain, HandlerResult, ToolCall, ToolDefinition, ToolValidator,
};
use tracing::{debug, info};

pub struct ToolServer {
    tools: Vec<(Domain, ToolDefinition)>,
    validator: DefaultToolValidator,
    weather: Arc<WeatherHandler>,
    data: Arc<DataHandler>,
    finance: Arc<FinanceHandler>,
}

impl ToolServer {
    pub fn new(
        weather: Arc<WeatherHandler>,
        data: Arc<DataHandler>,
        finance: Arc<FinanceHandler>,
    ) -> Self {
        Self {
            tools: catalog::default_tools(),
            validator: DefaultToolValidator,
            weather,
            data,
            finance,
        }
    }

    pub fn list_tools(&self) -> Vec<&ToolDefinition> {
        self.tools.iter().map(|(_, t)| t).collect()
    }

    /// Domain whose handler serves `tool_name`
    pub fn domain_of(&self, tool_name: &str) -> Option<Domain> {
        self.tools
            .iter()
            .find(|(_, t)| t.name == tool_name)
            .map(|(d, _)| *d)
    }

    pub fn definition(&self, tool_name: &str) -> Option<&ToolDefinition> {
        self.tools
            .iter()
            .map(|(_, t)| t)
            .find(|t| t.name == tool_name)
    }

    /// Validate and run one call, returning the handler result as JSON
    pub async fn call_tool(&self, call: &ToolCall) -> Result<Value, ToolCallError> {
        let definition = self
            .definition(&call.tool_name)
            .ok_or_else(|| ToolCallError::UnknownTool(call.tool_name.clone()))?;

        self.validator
            .validate(call, definition)
            .map_err(ToolCallError::InvalidArguments)?;

        info!(tool = %call.tool_name, "Calling tool");
        let result = self.dispatch(call).await?;
        debug!(tool = %call.tool_name, success = result.is_success(), "Tool finished");
        Ok(result.to_json())
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<HandlerResult, ToolCallError> {
        match call.tool_name.as_str() {
            GET_WEATHER => {
                let city = call
                    .require_string("city")
                    .map_err(ToolCallError::InvalidArguments)?;
                Ok(self.weather.current_weather(city).await?)
            }
            QUERY_DATABASE => {
                let text = call
                    .require_string("query_text")
                    .map_err(ToolCallError::InvalidArguments)?;
                Ok(self.data.answer(text).await?)
            }
            CONVERT_CURRENCY => {
                let amount = non_negative(call, "amount")?;
                let from = currency_code(call, "from_currency")?;
                let to = currency_code(call, "to_currency")?;
                Ok(self.finance.convert(amount, &from, &to))
            }
            CALCULATE_INTEREST => {
                let principal = non_negative(call, "principal")?;
                let rate = non_negative(call, "rate")?;
                let periods = positive_periods(call)?;
                let compound = call.get_bool("compound").unwrap_or(true);
                Ok(self.finance.interest(principal, rate, periods, compound))
            }
            GET_EXCHANGE_RATE => {
                let from = currency_code(call, "from_currency")?;
                let to = currency_code(call, "to_currency")?;
                Ok(self.finance.exchange_rate(&from, &to))
            }
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }
}

fn non_negative(call: &ToolCall, key: &str) -> Result<f64, ToolCallError> {
    let value = call
        .require_f64(key)
        .map_err(ToolCallError::InvalidArguments)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ToolCallError::InvalidArguments(format!(
            "'{}' must be a finite, non-negative number",
            key
        )));
    }
    Ok(value)
}

fn currency_code(call: &ToolCall, key: &str) -> Result<String, ToolCallError> {
    let code = call
        .require_string(key)
        .map_err(ToolCallError::InvalidArguments)?
        .trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ToolCallError::InvalidArguments(format!(
            "'{}' must be a three-letter currency code, got '{}'",
            key, code
        )));
    }
    Ok(code.to_uppercase())
}

fn positive_periods(call: &ToolCall) -> Result<u32, ToolCallError> {
    call.get_i64("periods")
        .and_then(|p| u32::try_from(p).ok())
        .filter(|p| (1..=MAX_PERIODS).contains(p))
        .ok_or_else(|| {
            ToolCallError::InvalidArguments(format!(
                "'periods' must be an integer between 1 and {}",
                MAX_PERIODS
            ))
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rusqlite::Connection;
    use serde_json::json;
    use super_agent_domain::ExchangeRates;
    use tempfile::NamedTempFile;

    pub(crate) fn server(db: &NamedTempFile) -> ToolServer {
        let conn = Connection::open(db.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE travel_bookings (id INTEGER PRIMARY KEY, customer_name TEXT, destination TEXT, booking_date TEXT);
             INSERT INTO travel_bookings (customer_name, destination, booking_date) VALUES
                ('Ana', 'Paris', '2024-01-10'),
                ('Bruno', 'Lisboa', '2024-02-11');",
        )
        .unwrap();

        ToolServer::new(
            Arc::new(WeatherHandler::new(reqwest::Client::new())),
            Arc::new(DataHandler::new(db.path()).unwrap()),
            Arc::new(FinanceHandler::new(ExchangeRates::default()).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_list_tools() {
        let db = NamedTempFile::new().unwrap();
        let server = server(&db);
        let names: Vec<&str> = server.list_tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                GET_WEATHER,
                QUERY_DATABASE,
                CONVERT_CURRENCY,
                CALCULATE_INTEREST,
                GET_EXCHANGE_RATE
            ]
        );
        assert_eq!(server.domain_of(QUERY_DATABASE), Some(Domain::Data));
        assert_eq!(server.domain_of("nope"), None);
    }

    #[tokio::test]
    async fn test_convert_currency() {
        let db = NamedTempFile::new().unwrap();
        let call = ToolCall::new(CONVERT_CURRENCY)
            .with_arg("amount", 100)
            .with_arg("from_currency", "usd")
            .with_arg("to_currency", "BRL");

        let value = server(&db).call_tool(&call).await.unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["agent"], "finance");
        assert_eq!(value["payload"]["converted_amount"], json!(500.0));
        assert_eq!(value["payload"]["from_currency"], "USD");
    }

    #[tokio::test]
    async fn test_query_database() {
        let db = NamedTempFile::new().unwrap();
        let call = ToolCall::new(QUERY_DATABASE).with_arg("query_text", "quantas reservas temos?");

        let value = server(&db).call_tool(&call).await.unwrap();
        assert_eq!(value["payload"]["results"], json!([{"total": 2}]));
    }

    #[tokio::test]
    async fn test_unsupported_city_is_a_failure_result() {
        let db = NamedTempFile::new().unwrap();
        let call = ToolCall::new(GET_WEATHER).with_arg("city", "Lisboa");

        let value = server(&db).call_tool(&call).await.unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().contains("not supported"));
    }

    #[tokio::test]
    async fn test_argument_validation() {
        let db = NamedTempFile::new().unwrap();
        let server = server(&db);

        let negative = ToolCall::new(CONVERT_CURRENCY)
            .with_arg("amount", -5)
            .with_arg("from_currency", "USD")
            .with_arg("to_currency", "BRL");
        assert!(matches!(
            server.call_tool(&negative).await,
            Err(ToolCallError::InvalidArguments(_))
        ));

        let bad_code = ToolCall::new(GET_EXCHANGE_RATE)
            .with_arg("from_currency", "DOLLAR")
            .with_arg("to_currency", "BRL");
        assert!(matches!(
            server.call_tool(&bad_code).await,
            Err(ToolCallError::InvalidArguments(_))
        ));

        let zero_periods = ToolCall::new(CALCULATE_INTEREST)
            .with_arg("principal", 1000)
            .with_arg("rate", 0.01)
            .with_arg("periods", 0);
        assert!(matches!(
            server.call_tool(&zero_periods).await,
            Err(ToolCallError::InvalidArguments(_))
        ));

        let wrong_type = ToolCall::new(GET_WEATHER).with_arg("city", 42);
        assert!(matches!(
            server.call_tool(&wrong_type).await,
            Err(ToolCallError::InvalidArguments(_))
        ));

        let unknown = ToolCall::new("delete_everything");
        assert!(matches!(
            server.call_tool(&unknown).await,
            Err(ToolCallError::UnknownTool(_))
        ));
    }

    #[tokio::test]
    async fn test_interest_periods_are_bounded() {
        let db = NamedTempFile::new().unwrap();
        let server = server(&db);
        let interest = |periods: i64| {
            ToolCall::new(CALCULATE_INTEREST)
                .with_arg("principal", 1000)
                .with_arg("rate", 0.01)
                .with_arg("periods", periods)
        };

        for periods in [i64::from(MAX_PERIODS) + 1, 100_000, 3_000_000_000] {
            assert!(matches!(
                server.call_tool(&interest(periods)).await,
                Err(ToolCallError::InvalidArguments(_))
            ));
        }

        let value = server
            .call_tool(&interest(i64::from(MAX_PERIODS)))
            .await
            .unwrap();
        assert_eq!(value["success"], true);
        assert!(value["payload"]["interest"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_interest_overflow_is_a_failure_result() {
        let db = NamedTempFile::new().unwrap();
        let call = ToolCall::new(CALCULATE_INTEREST)
            .with_arg("principal", 1000)
            .with_arg("rate", 1e300)
            .with_arg("periods", 2);

        let value = server(&db).call_tool(&call).await.unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().contains("overflowed"));
    }

    #[tokio::test]
    async fn test_interest_defaults_to_compound() {
        let db = NamedTempFile::new().unwrap();
        let call = ToolCall::new(CALCULATE_INTEREST)
            .with_arg("principal", 1000)
            .with_arg("rate", 0.01)
            .with_arg("periods", 12);

        let value = server(&db).call_tool(&call).await.unwrap();
        assert_eq!(value["payload"]["type"], "compound");
        assert_eq!(value["payload"]["final_amount"], json!(1126.83));
    }
}
