//! Natural-language to SQL translation for the bookings table
//!
//! Rules are checked in order; the first one that applies wins. User text
//! is never spliced into SQL: destinations and limits are bound parameters.

use regex::Regex;

/// Upper bound for "latest N bookings"
pub const MAX_LATEST: i64 = 100;
const DEFAULT_LATEST: i64 = 5;

/// A bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

/// Generated statement plus its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl SqlQuery {
    fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            params: Vec::new(),
        }
    }

    fn with_param(mut self, param: SqlParam) -> Self {
        self.params.push(param);
        self
    }
}

/// Translates booking questions (Portuguese or English) into SQL
#[derive(Debug, Clone)]
pub struct SqlGenerator {
    number: Regex,
    destination: Regex,
}

impl SqlGenerator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            number: Regex::new(r"\d+")?,
            destination: Regex::new(r"(?:reservas para|bookings to)\s+(.+)")?,
        })
    }

    pub fn generate(&self, text: &str) -> SqlQuery {
        let lowered = text.to_lowercase();
        let has = |needle: &str| lowered.contains(needle);

        if has("quantas reservas") || has("how many bookings") || has("total") {
            return SqlQuery::new("SELECT COUNT(*) AS total FROM travel_bookings");
        }

        if has("destino mais popular") || has("mais vendido") || has("most popular") {
            return SqlQuery::new(
                "SELECT destination, COUNT(*) AS count FROM travel_bookings \
                 GROUP BY destination ORDER BY count DESC LIMIT 1",
            );
        }

        if (has("últimas") || has("latest")) && (has("reservas") || has("bookings")) {
            let limit = self
                .number
                .find(&lowered)
                .and_then(|m| m.as_str().parse::<i64>().ok())
                .unwrap_or(DEFAULT_LATEST)
                .clamp(1, MAX_LATEST);
            return SqlQuery::new(
                "SELECT customer_name, destination, booking_date FROM travel_bookings \
                 ORDER BY booking_date DESC LIMIT ?1",
            )
            .with_param(SqlParam::Integer(limit));
        }

        if let Some(caps) = self.destination.captures(&lowered) {
            let destination = caps[1]
                .trim()
                .trim_end_matches(|c: char| c.is_ascii_punctuation())
                .trim();
            if !destination.is_empty() {
                return SqlQuery::new(
                    "SELECT customer_name, booking_date FROM travel_bookings \
                     WHERE LOWER(destination) LIKE ?1",
                )
                .with_param(SqlParam::Text(format!("%{}%", destination)));
            }
        }

        if (has("cliente") && has("mais reservas")) || has("top customer") {
            return SqlQuery::new(
                "SELECT customer_name, COUNT(*) AS bookings FROM travel_bookings \
                 GROUP BY customer_name ORDER BY bookings DESC LIMIT 1",
            );
        }

        SqlQuery::new("SELECT * FROM travel_bookings LIMIT 10")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(text: &str) -> SqlQuery {
        SqlGenerator::new().unwrap().generate(text)
    }

    #[test]
    fn test_count() {
        let query = generate("Quantas reservas temos?");
        assert!(query.sql.starts_with("SELECT COUNT(*) AS total"));
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_most_popular_destination() {
        assert!(generate("Qual o destino mais popular?").sql.contains("GROUP BY destination"));
        assert!(generate("most popular destination").sql.contains("GROUP BY destination"));
    }

    #[test]
    fn test_latest_with_limit() {
        let query = generate("Mostre as últimas 3 reservas");
        assert!(query.sql.contains("ORDER BY booking_date DESC"));
        assert_eq!(query.params, vec![SqlParam::Integer(3)]);

        assert_eq!(generate("latest bookings").params, vec![SqlParam::Integer(5)]);
        assert_eq!(
            generate("últimas 100000 reservas").params,
            vec![SqlParam::Integer(MAX_LATEST)]
        );
    }

    #[test]
    fn test_destination_is_bound_not_interpolated() {
        let query = generate("Reservas para Paris?");
        assert!(query.sql.contains("LIKE ?1"));
        assert!(!query.sql.contains("paris"));
        assert_eq!(query.params, vec![SqlParam::Text("%paris%".to_string())]);

        let hostile = generate("reservas para x'; DROP TABLE travel_bookings; --");
        assert!(!hostile.sql.contains("DROP"));
    }

    #[test]
    fn test_top_customer() {
        let query = generate("Qual cliente tem mais reservas?");
        assert!(query.sql.contains("GROUP BY customer_name"));
    }

    #[test]
    fn test_default_listing() {
        assert_eq!(generate("mostre o banco").sql, "SELECT * FROM travel_bookings LIMIT 10");
    }
}
