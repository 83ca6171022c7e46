//! Data handler: booking questions answered from SQLite

use super::sql::{SqlGenerator, SqlParam, SqlQuery};
use super::strings;
use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, params_from_iter};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use super_agent_application::{DomainHandler, HandlerError};
use super_agent_domain::{Domain, HandlerResult, Query};
use tracing::debug;

pub struct DataHandler {
    database_path: PathBuf,
    generator: SqlGenerator,
}

impl DataHandler {
    pub fn new(database_path: impl Into<PathBuf>) -> Result<Self, HandlerError> {
        let generator = SqlGenerator::new().map_err(|e| HandlerError::Other(e.to_string()))?;
        Ok(Self {
            database_path: database_path.into(),
            generator,
        })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Translate a question to SQL, run it and return the rows
    pub async fn answer(&self, text: &str) -> Result<HandlerResult, HandlerError> {
        let query = self.generator.generate(text);
        debug!(sql = %query.sql, "Generated SQL");

        let path = self.database_path.clone();
        let sql = query.sql.clone();
        let rows = tokio::task::spawn_blocking(move || run_query(&path, &query))
            .await
            .map_err(|e| HandlerError::Other(format!("query task failed: {}", e)))?
            .map_err(|e| HandlerError::Storage(e.to_string()))?;

        Ok(HandlerResult::success_json(
            Domain::Data,
            json!({
                "query": sql,
                "results": rows,
            }),
        ))
    }
}

fn run_query(path: &Path, query: &SqlQuery) -> rusqlite::Result<Vec<Value>> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    let mut stmt = conn.prepare(&query.sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let params = query.params.iter().map(|p| match p {
        SqlParam::Text(s) => rusqlite::types::Value::Text(s.clone()),
        SqlParam::Integer(n) => rusqlite::types::Value::Integer(*n),
    });

    let rows = stmt.query_map(params_from_iter(params), |row| {
        let mut object = Map::new();
        for (i, name) in columns.iter().enumerate() {
            object.insert(name.clone(), column_value(row.get_ref(i)?));
        }
        Ok(Value::Object(object))
    })?;

    rows.collect()
}

fn column_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => json!(n),
        ValueRef::Real(f) => json!(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => json!(format!("<{} bytes>", bytes.len())),
    }
}

#[async_trait]
impl DomainHandler for DataHandler {
    fn domain(&self) -> Domain {
        Domain::Data
    }

    fn capabilities(&self) -> Vec<String> {
        strings(&[
            "Count bookings",
            "Find the most popular destination",
            "List the latest bookings",
            "Find bookings for a destination",
            "Find the customer with most bookings",
        ])
    }

    async fn execute(&self, query: &Query) -> Result<HandlerResult, HandlerError> {
        self.answer(query.text()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super_agent_domain::AnswerFormatter;
    use tempfile::TempDir;

    fn seeded_database() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
CREATE TABLE travel_bookings (
    id INTEGER PRIMARY KEY,
    customer_name TEXT NOT NULL,
    destination TEXT NOT NULL,
    booking_date TEXT NOT NULL
);
INSERT INTO travel_bookings (customer_name, destination, booking_date) VALUES
    ('Ana', 'Paris', '2024-01-10'),
    ('Bruno', 'Lisboa', '2024-02-11'),
    ('Ana', 'Paris', '2024-03-12'),
    ('Carla', 'Roma', '2024-04-13');
"#,
        )
        .unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_count_bookings() {
        let (_dir, path) = seeded_database();
        let handler = DataHandler::new(path).unwrap();

        let result = handler.execute(&Query::new("Quantas reservas temos?")).await.unwrap();

        assert_eq!(result.payload().unwrap()["results"], json!([{"total": 4}]));
        assert_eq!(AnswerFormatter::format(&result), "Data (1 record):\n- total: 4");
    }

    #[tokio::test]
    async fn test_bookings_for_destination() {
        let (_dir, path) = seeded_database();
        let handler = DataHandler::new(path).unwrap();

        let result = handler.answer("reservas para paris").await.unwrap();
        let rows = result.payload().unwrap()["results"].as_array().unwrap().clone();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r["customer_name"] == "Ana"));
    }

    #[tokio::test]
    async fn test_latest_bookings_are_ordered() {
        let (_dir, path) = seeded_database();
        let handler = DataHandler::new(path).unwrap();

        let result = handler.answer("últimas 2 reservas").await.unwrap();
        let rows = result.payload().unwrap()["results"].as_array().unwrap().clone();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["destination"], "Roma");
        assert_eq!(rows[1]["destination"], "Paris");
    }

    #[tokio::test]
    async fn test_top_customer() {
        let (_dir, path) = seeded_database();
        let handler = DataHandler::new(path).unwrap();

        let result = handler.answer("qual cliente tem mais reservas").await.unwrap();
        assert_eq!(
            result.payload().unwrap()["results"],
            json!([{"customer_name": "Ana", "bookings": 2}])
        );
    }

    #[tokio::test]
    async fn test_missing_database_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let handler = DataHandler::new(dir.path().join("absent.db")).unwrap();

        let err = handler.answer("quantas reservas").await.unwrap_err();
        assert!(matches!(err, HandlerError::Storage(_)));
    }
}
