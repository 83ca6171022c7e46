//! Handler result value object: the uniform output of every domain handler

use crate::core::domain::Domain;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Domain-specific result fields. Untyped on purpose: consumers dispatch on
/// the producing [`Domain`], never on the shape of the payload.
pub type Payload = Map<String, Value>;

/// Success payload or failure message; never both.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    Success(Payload),
    Failure(String),
}

/// Result of executing one domain handler.
///
/// Constructed only through [`success`](Self::success) /
/// [`failure`](Self::failure), which keeps the payload/error exclusivity
/// intact. Serializes to the wire shape
/// `{"success": bool, "agent": "<domain>", "payload"|"error": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResult {
    agent: Domain,
    outcome: HandlerOutcome,
}

impl HandlerResult {
    /// Create a successful result
    pub fn success(agent: Domain, payload: Payload) -> Self {
        Self {
            agent,
            outcome: HandlerOutcome::Success(payload),
        }
    }

    /// Create a successful result from a JSON value.
    ///
    /// Objects become the payload directly; any other value is stored under
    /// a `value` key.
    pub fn success_json(agent: Domain, value: Value) -> Self {
        let payload = match value {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Self::success(agent, payload)
    }

    /// Create a failed result
    pub fn failure(agent: Domain, error: impl Into<String>) -> Self {
        Self {
            agent,
            outcome: HandlerOutcome::Failure(error.into()),
        }
    }

    pub fn agent(&self) -> Domain {
        self.agent
    }

    pub fn outcome(&self) -> &HandlerOutcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, HandlerOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Payload> {
        match &self.outcome {
            HandlerOutcome::Success(payload) => Some(payload),
            HandlerOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            HandlerOutcome::Success(_) => None,
            HandlerOutcome::Failure(error) => Some(error),
        }
    }

    /// The wire representation as a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[derive(Serialize)]
struct WireResult<'a> {
    success: bool,
    agent: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<&'a Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for HandlerResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireResult {
            success: self.is_success(),
            agent: self.agent,
            payload: self.payload(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}
