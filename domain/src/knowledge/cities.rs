//! City coordinate table

use serde::{Deserialize, Serialize};

/// A city the weather handler can look up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Name as it is matched inside queries (case-insensitive)
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into().to_lowercase(),
            latitude,
            longitude,
        }
    }
}

/// Known cities, searched by substring over lower-cased text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityTable(Vec<City>);

impl CityTable {
    pub fn new(cities: Vec<City>) -> Self {
        Self(
            cities
                .into_iter()
                .map(|c| City::new(c.name, c.latitude, c.longitude))
                .collect(),
        )
    }

    /// Find the city mentioned in `text`.
    ///
    /// The longest matching name wins, so a city whose name contains another
    /// city's name is still found.
    pub fn find_in(&self, text: &str) -> Option<&City> {
        let lowered = text.to_lowercase();
        self.0
            .iter()
            .filter(|c| lowered.contains(&c.name.to_lowercase()))
            .max_by_key(|c| c.name.len())
    }

    /// Exact (case-insensitive) lookup by name
    pub fn get(&self, name: &str) -> Option<&City> {
        let lowered = name.trim().to_lowercase();
        self.0.iter().find(|c| c.name.to_lowercase() == lowered)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.name.as_str())
    }
}

impl Default for CityTable {
    fn default() -> Self {
        Self(vec![
            City::new("são paulo", -23.5505, -46.6333),
            City::new("rio de janeiro", -22.9068, -43.1729),
            City::new("belo horizonte", -19.9167, -43.9345),
            City::new("brasília", -15.7939, -47.8828),
            City::new("curitiba", -25.4284, -49.2733),
            City::new("porto alegre", -30.0346, -51.2177),
            City::new("salvador", -12.9714, -38.5014),
            City::new("fortaleza", -3.7172, -38.5433),
            City::new("recife", -8.0476, -34.8770),
            City::new("manaus", -3.1190, -60.0217),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_query() {
        let table = CityTable::default();
        let city = table.find_in("Como está o clima em São Paulo?").unwrap();
        assert_eq!(city.name, "são paulo");
        assert!(table.find_in("clima em Lisboa").is_none());
    }

    #[test]
    fn test_longest_match_wins() {
        let table = CityTable::new(vec![
            City::new("Porto", 41.15, -8.61),
            City::new("Porto Alegre", -30.03, -51.22),
        ]);
        assert_eq!(table.find_in("tempo em porto alegre").unwrap().name, "porto alegre");
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let table = CityTable::default();
        assert!(table.get(" RECIFE ").is_some());
        assert!(table.get("recif").is_none());
    }
}
