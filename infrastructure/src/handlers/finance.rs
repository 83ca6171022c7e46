//! Finance handler: currency conversion, exchange rates and interest

use super::{round2, strings};
use async_trait::async_trait;
use regex::Regex;
use serde_json::{Value, json};
use super_agent_application::{DomainHandler, HandlerError};
use super_agent_domain::{Domain, ExchangeRates, HandlerResult, Query};
use tracing::debug;

const DEFAULT_PRINCIPAL: f64 = 1000.0;
const DEFAULT_RATE: f64 = 0.01;
const DEFAULT_PERIODS: u32 = 12;
const DEFAULT_PAIR: (&str, &str) = ("USD", "BRL");

/// Longest interest horizon accepted, in periods (100 years of months)
pub const MAX_PERIODS: u32 = 1200;

pub struct FinanceHandler {
    rates: ExchangeRates,
    conversion: Regex,
    currency_code: Regex,
    number: Regex,
    percent: Regex,
    period: Regex,
}

impl FinanceHandler {
    pub fn new(rates: ExchangeRates) -> Result<Self, HandlerError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| HandlerError::Other(e.to_string()))
        };
        Ok(Self {
            rates,
            conversion: compile(
                r"(?i)(\d+(?:\.\d+)?)\s*([a-z]{3})\s+(?:para|to|in|em)\s+([a-z]{3})\b",
            )?,
            currency_code: compile(r"\b[A-Z]{3}\b")?,
            number: compile(r"\d+(?:\.\d+)?")?,
            percent: compile(r"(\d+(?:\.\d+)?)\s*%")?,
            period: compile(r"(?i)(\d+)\s*(meses|mês|mes|months?|anos|ano|years?)\b")?,
        })
    }

    /// Convert `amount` between two currencies
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> HandlerResult {
        self.conversion_result(amount_json(amount), amount, from, to)
    }

    /// Rate for one unit of `from` in `to`
    pub fn exchange_rate(&self, from: &str, to: &str) -> HandlerResult {
        let from = from.to_uppercase();
        let to = to.to_uppercase();
        let Some(rate) = self.rates.rate(&from, &to) else {
            return missing_rate(&from, &to);
        };

        HandlerResult::success_json(
            Domain::Finance,
            json!({
                "operation": "exchange_rate",
                "from_currency": from,
                "to_currency": to,
                "rate": rate,
                "info": format!("1 {} = {} {}", from, json!(rate), to),
            }),
        )
    }

    /// Simple (`principal * rate * periods`) or compound
    /// (`principal * (1 + rate)^periods`) interest; `rate` is per period.
    ///
    /// `periods` outside `1..=`[`MAX_PERIODS`] and results that overflow `f64` are
    /// failures.
    pub fn interest(&self, principal: f64, rate: f64, periods: u32, compound: bool) -> HandlerResult {
        let exponent = match i32::try_from(periods) {
            Ok(n) if (1..=MAX_PERIODS).contains(&periods) => n,
            _ => {
                return HandlerResult::failure(
                    Domain::Finance,
                    format!("periods must be between 1 and {}, got {}", MAX_PERIODS, periods),
                );
            }
        };

        let (interest, final_amount) = if compound {
            let final_amount = principal * (1.0 + rate).powi(exponent);
            (final_amount - principal, final_amount)
        } else {
            let interest = principal * rate * f64::from(periods);
            (interest, principal + interest)
        };

        if !interest.is_finite() || !final_amount.is_finite() {
            return HandlerResult::failure(
                Domain::Finance,
                "interest calculation overflowed; use a smaller rate or fewer periods",
            );
        }

        HandlerResult::success_json(
            Domain::Finance,
            json!({
                "operation": "interest_calculation",
                "type": if compound { "compound" } else { "simple" },
                "principal": round2(principal),
                "rate": rate,
                "periods": periods,
                "interest": round2(interest),
                "final_amount": round2(final_amount),
            }),
        )
    }

    fn conversion_result(&self, original: Value, amount: f64, from: &str, to: &str) -> HandlerResult {
        let from = from.to_uppercase();
        let to = to.to_uppercase();
        let Some(rate) = self.rates.rate(&from, &to) else {
            return missing_rate(&from, &to);
        };

        HandlerResult::success_json(
            Domain::Finance,
            json!({
                "operation": "currency_conversion",
                "original_amount": original,
                "converted_amount": round2(amount * rate),
                "from_currency": from,
                "to_currency": to,
                "exchange_rate": rate,
            }),
        )
    }

    fn conversion_from_text(&self, text: &str) -> HandlerResult {
        let Some(caps) = self.conversion.captures(text) else {
            return HandlerResult::failure(
                Domain::Finance,
                "could not extract an amount and currencies from the query",
            );
        };

        let typed = &caps[1];
        let Ok(amount) = typed.parse::<f64>() else {
            return HandlerResult::failure(Domain::Finance, format!("invalid amount '{}'", typed));
        };
        // Keep the amount as typed: "1000" stays an integer
        let original = typed
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| json!(amount));

        self.conversion_result(original, amount, &caps[2], &caps[3])
    }

    fn exchange_rate_from_text(&self, text: &str) -> HandlerResult {
        let upper = text.to_uppercase();
        let mut codes: Vec<&str> = Vec::new();
        for m in self.currency_code.find_iter(&upper) {
            let code = m.as_str();
            if self.rates.knows(code) && !codes.contains(&code) {
                codes.push(code);
            }
        }

        match codes.as_slice() {
            [from, to, ..] => self.exchange_rate(from, to),
            _ => self.exchange_rate(DEFAULT_PAIR.0, DEFAULT_PAIR.1),
        }
    }

    fn interest_from_text(&self, text: &str) -> HandlerResult {
        let lowered = text.to_lowercase();

        let principal = self
            .number
            .find(text)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(DEFAULT_PRINCIPAL);

        let rate = self
            .percent
            .captures(text)
            .and_then(|c| c[1].parse::<f64>().ok())
            .map(|p| p / 100.0)
            .unwrap_or(DEFAULT_RATE);

        let periods = self
            .period
            .captures(&lowered)
            .map(|c| {
                // Too many digits for u64 still counts as out of range
                let n = c[1].parse::<u64>().unwrap_or(u64::MAX);
                let unit = &c[2];
                let months = if unit.starts_with("ano") || unit.starts_with("year") {
                    n.saturating_mul(12)
                } else {
                    n
                };
                u32::try_from(months).unwrap_or(u32::MAX)
            })
            .unwrap_or(DEFAULT_PERIODS);

        let compound = ["compostos", "composto", "compound"]
            .iter()
            .any(|w| lowered.contains(w));

        self.interest(principal, rate, periods, compound)
    }
}

fn missing_rate(from: &str, to: &str) -> HandlerResult {
    HandlerResult::failure(
        Domain::Finance,
        format!("no exchange rate from {} to {}", from, to),
    )
}

/// JSON form of an amount: whole numbers render without a fraction
fn amount_json(amount: f64) -> Value {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        json!(amount as i64)
    } else {
        json!(amount)
    }
}

#[async_trait]
impl DomainHandler for FinanceHandler {
    fn domain(&self) -> Domain {
        Domain::Finance
    }

    fn capabilities(&self) -> Vec<String> {
        strings(&[
            "Currency conversion",
            "Exchange rates",
            "Simple interest",
            "Compound interest",
        ])
    }

    async fn execute(&self, query: &Query) -> Result<HandlerResult, HandlerError> {
        let text = query.text();
        let lowered = query.normalized();
        let has = |needle: &str| lowered.contains(needle);

        let result = if has("convert") {
            debug!("Finance operation: conversion");
            self.conversion_from_text(text)
        } else if (has("taxa") && (has("câmbio") || has("cambio"))) || has("exchange rate") {
            debug!("Finance operation: exchange rate");
            self.exchange_rate_from_text(text)
        } else if has("juros") || has("interest") {
            debug!("Finance operation: interest");
            self.interest_from_text(text)
        } else {
            HandlerResult::failure(Domain::Finance, "unrecognised financial operation")
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super_agent_domain::AnswerFormatter;

    fn handler() -> FinanceHandler {
        FinanceHandler::new(ExchangeRates::default()).unwrap()
    }

    async fn run(text: &str) -> HandlerResult {
        handler().execute(&Query::new(text)).await.unwrap()
    }

    #[tokio::test]
    async fn test_conversion_keeps_typed_amount() {
        let result = run("Converta 1000 USD para BRL").await;
        let payload = result.payload().unwrap();

        assert_eq!(payload["original_amount"], json!(1000));
        assert_eq!(payload["converted_amount"], json!(5000.0));
        assert_eq!(payload["exchange_rate"], json!(5.0));
        assert_eq!(AnswerFormatter::format(&result), "1000 USD = 5000.0 BRL");
    }

    #[tokio::test]
    async fn test_conversion_in_english_with_decimals() {
        let result = run("convert 10.5 brl to usd").await;
        let payload = result.payload().unwrap();

        assert_eq!(payload["original_amount"], json!(10.5));
        assert_eq!(payload["from_currency"], "BRL");
        assert_eq!(payload["converted_amount"], json!(2.1));
    }

    #[tokio::test]
    async fn test_conversion_same_currency() {
        let result = run("converter 42 BRL em BRL").await;
        assert_eq!(result.payload().unwrap()["converted_amount"], json!(42.0));
    }

    #[tokio::test]
    async fn test_missing_rate_is_failure() {
        let result = run("Converta 100 USD para JPY").await;
        assert_eq!(result.error(), Some("no exchange rate from USD to JPY"));
    }

    #[tokio::test]
    async fn test_unparseable_conversion() {
        let result = run("converta dinheiro").await;
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_exchange_rate_from_query() {
        let result = run("Qual a taxa de câmbio de EUR para BRL?").await;
        assert_eq!(
            AnswerFormatter::format(&result),
            "Exchange rate: 1 EUR = 5.45 BRL"
        );
    }

    #[tokio::test]
    async fn test_exchange_rate_default_pair() {
        let result = run("qual a taxa de câmbio hoje?").await;
        let payload = result.payload().unwrap();
        assert_eq!(payload["from_currency"], "USD");
        assert_eq!(payload["to_currency"], "BRL");
        assert_eq!(payload["info"], "1 USD = 5.0 BRL");
    }

    #[tokio::test]
    async fn test_compound_interest() {
        let result = run("Calcule juros compostos de 10000 a 0.5% por 12 meses").await;
        let payload = result.payload().unwrap();

        assert_eq!(payload["type"], "compound");
        assert_eq!(payload["principal"], json!(10000.0));
        assert_eq!(payload["periods"], json!(12));
        assert_eq!(payload["interest"], json!(616.78));
        assert_eq!(payload["final_amount"], json!(10616.78));
    }

    #[tokio::test]
    async fn test_simple_interest_in_years() {
        let result = run("juros simples de 2000 a 1% por 2 anos").await;
        let payload = result.payload().unwrap();

        assert_eq!(payload["type"], "simple");
        assert_eq!(payload["periods"], json!(24));
        assert_eq!(payload["interest"], json!(480.0));
        assert_eq!(payload["final_amount"], json!(2480.0));
    }

    #[tokio::test]
    async fn test_interest_defaults() {
        let result = run("quanto rende de juros?").await;
        let payload = result.payload().unwrap();

        assert_eq!(payload["principal"], json!(1000.0));
        assert_eq!(payload["rate"], json!(0.01));
        assert_eq!(payload["periods"], json!(12));
    }

    #[tokio::test]
    async fn test_unrecognised_operation() {
        let result = run("quanto custa uma ação?").await;
        assert_eq!(result.error(), Some("unrecognised financial operation"));
    }

    #[tokio::test]
    async fn test_interest_periods_beyond_limit_fail() {
        for text in [
            "juros compostos de 1000 a 1% por 3000000000 meses",
            "juros compostos de 1000 a 1% por 99999999999999999999999 meses",
            "juros simples de 1000 a 1% por 101 anos",
        ] {
            let result = run(text).await;
            assert!(!result.is_success(), "{} should fail", text);
            assert!(result.error().unwrap().contains("periods"));
        }
    }

    #[test]
    fn test_interest_bounds() {
        let h = handler();
        assert!(!h.interest(1000.0, 0.01, 3_000_000_000, true).is_success());
        assert!(!h.interest(1000.0, 0.01, MAX_PERIODS + 1, false).is_success());

        let at_limit = h.interest(1000.0, 0.01, MAX_PERIODS, true);
        let payload = at_limit.payload().unwrap();
        assert!(payload["final_amount"].as_f64().unwrap() > 1000.0);
        assert!(payload["interest"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_interest_overflow_is_failure() {
        let result = handler().interest(1000.0, 1e300, 2, true);
        assert!(result.error().unwrap().contains("overflowed"));
    }

    #[test]
    fn test_typed_conversion_whole_amount() {
        let result = handler().convert(250.0, "brl", "usd");
        let payload = result.payload().unwrap();
        assert_eq!(payload["original_amount"], json!(250));
        assert_eq!(payload["converted_amount"], json!(50.0));
    }
}
