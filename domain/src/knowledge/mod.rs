//! Read-only knowledge tables injected into handlers at construction.
//!
//! Each table has a built-in default and can be replaced from configuration.

pub mod cities;
pub mod conditions;
pub mod rates;
pub mod topics;

pub use cities::{City, CityTable};
pub use conditions::{WeatherCondition, WeatherConditions};
pub use rates::ExchangeRates;
pub use topics::{KnowledgeBase, Topic};
