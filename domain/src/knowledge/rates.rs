//! Exchange-rate table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type RateMap = BTreeMap<String, BTreeMap<String, f64>>;

/// Static exchange rates: `from -> to -> rate`, keyed by upper-case ISO codes.
///
/// Codes are upper-cased on construction, including when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RateMap", into = "RateMap")]
pub struct ExchangeRates(RateMap);

impl From<RateMap> for ExchangeRates {
    fn from(rates: RateMap) -> Self {
        Self::new(rates)
    }
}

impl From<ExchangeRates> for RateMap {
    fn from(rates: ExchangeRates) -> Self {
        rates.0
    }
}

impl ExchangeRates {
    pub fn new(rates: RateMap) -> Self {
        let normalized = rates
            .into_iter()
            .map(|(from, targets)| {
                let targets = targets
                    .into_iter()
                    .map(|(to, rate)| (to.to_uppercase(), rate))
                    .collect();
                (from.to_uppercase(), targets)
            })
            .collect();
        Self(normalized)
    }

    /// Build from `(from, to, rate)` triples
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str, f64)>) -> Self {
        let mut rates = RateMap::new();
        for (from, to, rate) in pairs {
            rates
                .entry(from.to_uppercase())
                .or_default()
                .insert(to.to_uppercase(), rate);
        }
        Self(rates)
    }

    /// Rate for converting `from` into `to`; identical codes always convert at 1.0
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        let from = from.to_uppercase();
        let to = to.to_uppercase();
        if from == to {
            return Some(1.0);
        }
        self.0.get(&from).and_then(|targets| targets.get(&to)).copied()
    }

    /// Every currency code that appears in the table, sorted
    pub fn currencies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .0
            .iter()
            .flat_map(|(from, targets)| {
                std::iter::once(from.as_str()).chain(targets.keys().map(String::as_str))
            })
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    pub fn knows(&self, code: &str) -> bool {
        let code = code.to_uppercase();
        self.currencies().iter().any(|c| *c == code)
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::from_pairs([
            ("USD", "BRL", 5.0),
            ("USD", "EUR", 0.92),
            ("BRL", "USD", 0.20),
            ("BRL", "EUR", 0.18),
            ("EUR", "USD", 1.09),
            ("EUR", "BRL", 5.45),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = ExchangeRates::default();
        assert_eq!(rates.rate("USD", "BRL"), Some(5.0));
        assert_eq!(rates.rate("eur", "brl"), Some(5.45));
        assert_eq!(rates.rate("BRL", "BRL"), Some(1.0));
        assert_eq!(rates.rate("USD", "JPY"), None);
    }

    #[test]
    fn test_currencies() {
        let rates = ExchangeRates::from_pairs([("usd", "jpy", 150.0)]);
        assert_eq!(rates.currencies(), vec!["JPY", "USD"]);
        assert!(rates.knows("jpy"));
        assert!(!rates.knows("BRL"));
    }
}
