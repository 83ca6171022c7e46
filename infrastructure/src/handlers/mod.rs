//! Domain handler adapters
//!
//! | Domain | Handler | Backing |
//! |--------|---------|---------|
//! | `weather` | [`WeatherHandler`] | Open-Meteo over `reqwest` |
//! | `data` | [`DataHandler`] | read-only SQLite over `rusqlite` |
//! | `finance` | [`FinanceHandler`] | injected exchange-rate table |
//! | `information` | [`InformationHandler`] | injected knowledge base |

pub mod data;
pub mod finance;
pub mod information;
pub mod sql;
pub mod weather;

pub use data::DataHandler;
pub use finance::FinanceHandler;
pub use information::InformationHandler;
pub use sql::{SqlGenerator, SqlQuery};
pub use weather::WeatherHandler;

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
