//! Tool catalogue: one remotely callable tool per handler capability

use super::entities::{ParamType, ToolDefinition, ToolParameter};
use crate::core::domain::Domain;

pub const GET_WEATHER: &str = "get_weather";
pub const QUERY_DATABASE: &str = "query_database";
pub const CONVERT_CURRENCY: &str = "convert_currency";
pub const CALCULATE_INTEREST: &str = "calculate_interest";
pub const GET_EXCHANGE_RATE: &str = "get_exchange_rate";

/// Every tool with the domain whose handler serves it
pub fn default_tools() -> Vec<(Domain, ToolDefinition)> {
    vec![
        (
            Domain::Weather,
            ToolDefinition::new(GET_WEATHER, "Get the current weather for a supported city")
                .with_parameter(ToolParameter::new(
                    "city",
                    "City name, e.g. \"São Paulo\"",
                    true,
                    ParamType::String,
                )),
        ),
        (
            Domain::Data,
            ToolDefinition::new(
                QUERY_DATABASE,
                "Answer a natural-language question from the bookings database",
            )
            .with_parameter(ToolParameter::new(
                "query_text",
                "Question about bookings, e.g. \"quantas reservas temos?\"",
                true,
                ParamType::String,
            )),
        ),
        (
            Domain::Finance,
            ToolDefinition::new(CONVERT_CURRENCY, "Convert an amount between two currencies")
                .with_parameter(ToolParameter::new(
                    "amount",
                    "Non-negative amount to convert",
                    true,
                    ParamType::Number,
                ))
                .with_parameter(ToolParameter::new(
                    "from_currency",
                    "Three-letter source currency code",
                    true,
                    ParamType::String,
                ))
                .with_parameter(ToolParameter::new(
                    "to_currency",
                    "Three-letter target currency code",
                    true,
                    ParamType::String,
                )),
        ),
        (
            Domain::Finance,
            ToolDefinition::new(CALCULATE_INTEREST, "Calculate simple or compound interest")
                .with_parameter(ToolParameter::new(
                    "principal",
                    "Non-negative principal amount",
                    true,
                    ParamType::Number,
                ))
                .with_parameter(ToolParameter::new(
                    "rate",
                    "Interest rate per period as a fraction (0.01 = 1%)",
                    true,
                    ParamType::Number,
                ))
                .with_parameter(ToolParameter::new(
                    "periods",
                    "Number of periods (months, 1 to 1200)",
                    true,
                    ParamType::Integer,
                ))
                .with_parameter(ToolParameter::new(
                    "compound",
                    "Compound interest when true (default), simple otherwise",
                    false,
                    ParamType::Boolean,
                )),
        ),
        (
            Domain::Finance,
            ToolDefinition::new(GET_EXCHANGE_RATE, "Get the exchange rate between two currencies")
                .with_parameter(ToolParameter::new(
                    "from_currency",
                    "Three-letter source currency code",
                    true,
                    ParamType::String,
                ))
                .with_parameter(ToolParameter::new(
                    "to_currency",
                    "Three-letter target currency code",
                    true,
                    ParamType::String,
                )),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_are_unique() {
        let tools = default_tools();
        let mut names: Vec<&str> = tools.iter().map(|(_, t)| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn test_information_has_no_tool() {
        assert!(default_tools().iter().all(|(d, _)| *d != Domain::Information));
    }
}
