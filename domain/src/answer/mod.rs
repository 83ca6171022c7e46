//! Answer formatting: turns one [`HandlerResult`] into a block of text
//!
//! Dispatch is an exhaustive match on [`Domain`]. Every rule extracts the
//! fields it knows and returns `None` when one is missing, in which case the
//! generic fallback (the payload as compact JSON) is used instead. Rendering
//! therefore never fails, whatever the payload looks like.

pub mod fields;

use crate::core::domain::Domain;
use crate::core::string::truncate;
use crate::handler::result::{HandlerOutcome, HandlerResult, Payload};
use fields::{any_text, field, text_list};
use serde_json::Value;

/// Maximum length of the fallback rendering of a payload
const MAX_FALLBACK_LEN: usize = 500;

/// Formats handler results as human-readable text
pub struct AnswerFormatter;

impl AnswerFormatter {
    /// Render one result
    pub fn format(result: &HandlerResult) -> String {
        match result.outcome() {
            HandlerOutcome::Failure(error) => Self::failure(error),
            HandlerOutcome::Success(payload) => Self::success(result.agent(), payload)
                .unwrap_or_else(|| Self::fallback(result.agent(), payload)),
        }
    }

    /// Render a failure line quoting the handler's message
    pub fn failure(error: &str) -> String {
        format!("Error: {}", error)
    }

    /// Generic rendering used when no domain rule applies
    pub fn fallback(agent: Domain, payload: &Payload) -> String {
        let body = serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
        format!("{} result: {}", agent, truncate(&body, MAX_FALLBACK_LEN))
    }

    fn success(agent: Domain, payload: &Payload) -> Option<String> {
        match agent {
            Domain::Weather => Self::weather(payload),
            Domain::Data => Self::data(payload),
            Domain::Finance => Self::finance(payload),
            Domain::Information => Self::information(payload),
        }
    }

    fn weather(payload: &Payload) -> Option<String> {
        let temperature = field(payload, "temperature")?;
        let condition = field(payload, "condition")?;
        let humidity = field(payload, "humidity")?;

        let mut line = match field(payload, "city") {
            Some(city) => format!("Weather in {}: ", city),
            None => "Weather: ".to_string(),
        };
        line.push_str(&format!(
            "{}°C, {}, humidity {}%",
            temperature, condition, humidity
        ));
        if let Some(wind) = field(payload, "wind_speed") {
            line.push_str(&format!(", wind {} km/h", wind));
        }
        Some(line)
    }

    fn data(payload: &Payload) -> Option<String> {
        let rows = payload.get("results")?.as_array()?;

        if rows.is_empty() {
            return Some("Data: no matching records.".to_string());
        }

        let mut text = format!(
            "Data ({} record{}):",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" }
        );
        for row in rows {
            let line = match row {
                Value::Object(columns) => columns
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, any_text(value)))
                    .collect::<Vec<_>>()
                    .join(", "),
                other => any_text(other),
            };
            text.push_str(&format!("\n- {}", line));
        }
        Some(text)
    }

    fn finance(payload: &Payload) -> Option<String> {
        match field(payload, "operation")?.as_str() {
            "currency_conversion" => Some(format!(
                "{} {} = {} {}",
                field(payload, "original_amount")?,
                field(payload, "from_currency")?,
                field(payload, "converted_amount")?,
                field(payload, "to_currency")?,
            )),
            "exchange_rate" => Some(format!(
                "Exchange rate: 1 {} = {} {}",
                field(payload, "from_currency")?,
                field(payload, "rate")?,
                field(payload, "to_currency")?,
            )),
            "interest_calculation" => {
                let kind = match field(payload, "type").as_deref() {
                    Some("compound") => "Compound",
                    _ => "Simple",
                };
                Some(format!(
                    "{} interest: {}, total: {}",
                    kind,
                    field(payload, "interest")?,
                    field(payload, "final_amount")?,
                ))
            }
            _ => None,
        }
    }

    fn information(payload: &Payload) -> Option<String> {
        let mut text = field(payload, "definition")?;

        let concepts = text_list(payload, "key_concepts");
        if !concepts.is_empty() {
            text.push_str(&format!("\nKey concepts: {}", concepts.join(", ")));
        }
        let benefits = text_list(payload, "benefits");
        if !benefits.is_empty() {
            text.push_str(&format!("\nBenefits: {}", benefits.join(", ")));
        }
        let topics = text_list(payload, "available_topics");
        if !topics.is_empty() {
            text.push_str(&format!("\nAvailable topics: {}", topics.join(", ")));
        }
        if let Some(suggestion) = field(payload, "suggestion") {
            text.push_str(&format!("\n{}", suggestion));
        }
        Some(text)
    }
}
