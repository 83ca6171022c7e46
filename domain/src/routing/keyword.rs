//! Keyword routing table
//!
//! Each domain owns a set of lower-case trigger substrings. Rules are
//! evaluated in a fixed priority order and the first domain with a matching
//! trigger wins, so overlapping queries resolve deterministically:
//!
//! | Priority | Domain | Triggers (excerpt) |
//! |----------|--------|--------------------|
//! | 1 | `weather` | clima, tempo, temperatura, previsão, weather, forecast |
//! | 2 | `data` | banco, database, reserva, dados, booking, sql |
//! | 3 | `finance` | moeda, currency, convert, juros, câmbio, interest |
//! | (none) | `information` | default when nothing matches |
//!
//! A query mentioning both "clima" and "banco" therefore routes to `weather`.

use super::decision::RoutingDecision;
use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::core::query::Query;

/// A single priority-ordered routing rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub domain: Domain,
    pub triggers: Vec<String>,
}

/// Priority-ordered keyword rules with a default domain.
///
/// Classification is a pure function of the normalized query text and the
/// table contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
    default: Domain,
}

impl KeywordTable {
    /// Create an empty table that routes everything to the default domain
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            default: Domain::DEFAULT,
        }
    }

    /// Append a rule at the lowest priority so far.
    ///
    /// Triggers are lower-cased; empty triggers are rejected since they
    /// would match every query.
    pub fn with_rule<I, S>(mut self, domain: Domain, triggers: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.rules.iter().any(|r| r.domain == domain) {
            return Err(DomainError::InvalidRoutingTable(format!(
                "domain '{}' already has a rule",
                domain
            )));
        }

        let triggers: Vec<String> = triggers
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .collect();

        if triggers.iter().any(|t| t.is_empty()) {
            return Err(DomainError::InvalidRoutingTable(format!(
                "domain '{}' has an empty trigger",
                domain
            )));
        }

        self.rules.push(KeywordRule { domain, triggers });
        Ok(self)
    }

    /// Domains in the order their rules are evaluated, default last
    pub fn priority(&self) -> Vec<Domain> {
        let mut order: Vec<Domain> = self.rules.iter().map(|r| r.domain).collect();
        if !order.contains(&self.default) {
            order.push(self.default);
        }
        order
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn default_domain(&self) -> Domain {
        self.default
    }

    /// Classify a query. Always returns a domain from the table or the default.
    pub fn classify(&self, query: &Query) -> RoutingDecision {
        if query.is_blank() {
            return RoutingDecision::new(self.default).with_rationale("empty query");
        }

        let normalized = query.normalized();
        for rule in &self.rules {
            if let Some(trigger) = rule.triggers.iter().find(|t| normalized.contains(t.as_str())) {
                return RoutingDecision::new(rule.domain)
                    .with_rationale(format!("matched keyword '{}'", trigger));
            }
        }

        RoutingDecision::new(self.default).with_rationale("no keyword matched")
    }
}

impl Default for KeywordTable {
    /// Built-in triggers, Portuguese and English, in the documented priority order
    fn default() -> Self {
        Self {
            rules: vec![
                rule(
                    Domain::Weather,
                    &[
                        "clima",
                        "tempo",
                        "temperatura",
                        "previsão",
                        "previsao",
                        "weather",
                        "forecast",
                        "temperature",
                    ],
                ),
                rule(
                    Domain::Data,
                    &[
                        "banco",
                        "database",
                        "reserva",
                        "dados",
                        "query",
                        "booking",
                        "sql",
                    ],
                ),
                rule(
                    Domain::Finance,
                    &[
                        "moeda",
                        "currency",
                        "convert",
                        "juros",
                        "câmbio",
                        "cambio",
                        "interest",
                        "exchange rate",
                    ],
                ),
            ],
            default: Domain::DEFAULT,
        }
    }
}

fn rule(domain: Domain, triggers: &[&str]) -> KeywordRule {
    KeywordRule {
        domain,
        triggers: triggers.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(text: &str) -> Domain {
        KeywordTable::default().classify(&Query::new(text)).domain
    }

    #[test]
    fn test_route_weather() {
        assert_eq!(route("Como está o clima?"), Domain::Weather);
        assert_eq!(route("What's the WEATHER like in Recife"), Domain::Weather);
    }

    #[test]
    fn test_route_data() {
        assert_eq!(route("Quantas reservas?"), Domain::Data);
    }

    #[test]
    fn test_route_finance() {
        assert_eq!(route("Converta moeda"), Domain::Finance);
        assert_eq!(route("Converta 1000 USD para BRL"), Domain::Finance);
        assert_eq!(route("Qual a taxa de câmbio hoje?"), Domain::Finance);
    }

    #[test]
    fn test_no_match_routes_to_default() {
        let decision = KeywordTable::default().classify(&Query::new("O que é MCP?"));
        assert_eq!(decision.domain, Domain::Information);
        assert_eq!(decision.rationale.as_deref(), Some("no keyword matched"));
    }

    #[test]
    fn test_blank_query_routes_to_default() {
        assert_eq!(route(""), Domain::Information);
        assert_eq!(route("   "), Domain::Information);
    }

    #[test]
    fn test_priority_weather_beats_data() {
        let table = KeywordTable::default();
        assert_eq!(
            table.priority(),
            vec![Domain::Weather, Domain::Data, Domain::Finance, Domain::Information]
        );
        assert_eq!(route("clima no banco de dados"), Domain::Weather);
        assert_eq!(route("banco de dados sobre o clima"), Domain::Weather);
    }

    #[test]
    fn test_priority_data_beats_finance() {
        assert_eq!(route("reservas pagas em outra moeda"), Domain::Data);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let table = KeywordTable::default();
        for text in ["", "clima", "banco e juros", "nothing here", "ÇÂMBIO"] {
            let query = Query::new(text);
            assert_eq!(table.classify(&query), table.classify(&query));
        }
    }

    #[test]
    fn test_rationale_names_matched_trigger() {
        let decision = KeywordTable::default().classify(&Query::new("Previsão para amanhã"));
        assert_eq!(decision.rationale.as_deref(), Some("matched keyword 'previsão'"));
    }

    #[test]
    fn test_custom_table() {
        let table = KeywordTable::empty()
            .with_rule(Domain::Finance, ["Dinheiro"])
            .unwrap()
            .with_rule(Domain::Weather, ["sol"])
            .unwrap();
        assert_eq!(
            table.classify(&Query::new("dinheiro ao sol")).domain,
            Domain::Finance
        );
        assert_eq!(
            table.priority(),
            vec![Domain::Finance, Domain::Weather, Domain::Information]
        );
    }

    #[test]
    fn test_rejects_empty_trigger_and_duplicate_rule() {
        assert!(KeywordTable::empty().with_rule(Domain::Data, [" "]).is_err());
        let table = KeywordTable::empty().with_rule(Domain::Data, ["sql"]).unwrap();
        assert!(table.with_rule(Domain::Data, ["banco"]).is_err());
    }
}
