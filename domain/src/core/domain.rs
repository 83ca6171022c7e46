//! Domain identifier value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A capability domain served by exactly one handler (Value Object)
///
/// The set is closed: routing, registry lookup and answer formatting all
/// match exhaustively on it, so adding a domain is a compile-time decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Current weather for a known city
    Weather,
    /// Questions answered from the bookings database
    Data,
    /// Currency conversion, exchange rates and interest
    Finance,
    /// General knowledge; the catch-all domain
    Information,
}

impl Domain {
    /// Every domain, in declaration order
    pub const ALL: [Domain; 4] = [
        Domain::Weather,
        Domain::Data,
        Domain::Finance,
        Domain::Information,
    ];

    /// The catch-all domain returned when nothing more specific applies
    pub const DEFAULT: Domain = Domain::Information;

    /// Get the string identifier for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Weather => "weather",
            Domain::Data => "data",
            Domain::Finance => "finance",
            Domain::Information => "information",
        }
    }

    /// One-line description, used when asking a model to classify a query
    pub fn description(&self) -> &'static str {
        match self {
            Domain::Weather => "weather, temperature, forecasts and climate conditions",
            Domain::Data => "database questions about bookings, reservations and statistics",
            Domain::Finance => "currency conversion, exchange rates and interest calculations",
            Domain::Information => "general questions, explanations and anything else",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = DomainError;

    /// Parses an identifier after trimming and lower-casing it.
    ///
    /// The `<name>_agent` spellings and `info` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "weather" | "weather_agent" => Ok(Domain::Weather),
            "data" | "data_agent" => Ok(Domain::Data),
            "finance" | "finance_agent" => Ok(Domain::Finance),
            "information" | "info" | "information_agent" | "info_agent" => {
                Ok(Domain::Information)
            }
            _ => Err(DomainError::UnknownDomain(s.to_string())),
        }
    }
}
