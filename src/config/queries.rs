use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_QUERIES: &[&[&str]] = &[
    &["milk", "flour", "ginger"],
    &["lentils", "rice", "avocado"],
    &["pasta", "potato", "beef"],
    &["carrot", "quinoa", "soy sauce"],
    &["chickpeas", "egg", "broccoli"],
    &["tofu", "basil", "sugar"],
    &["bell pepper", "olive oil", "tomato"],
    &["butter", "garlic", "chicken"],
    &["cheese", "onion", "spinach"],
    &["lemon", "cucumber", "milk"],
    &["rice", "basil", "flour"],
    &["ginger", "beef", "avocado"],
    &["quinoa", "chickpeas", "soy sauce"],
    &["broccoli", "egg", "potato"],
    &["tofu", "carrot", "bell pepper"],
    &["basil", "tomato", "butter"],
    &["cheese", "garlic", "cucumber"],
    &["spinach", "sugar", "onion"],
    &["chicken", "lemon", "rice"],
    &["pasta", "milk", "olive oil"],
    &["lentils", "tomato", "broccoli"],
    &["potato", "butter", "cheese"],
    &["avocado", "ginger", "spinach"],
    &["onion", "soy sauce", "basil"],
    &["chickpeas", "bell pepper", "carrot"],
    &["tofu", "egg", "olive oil"],
    &["tomato", "chicken", "garlic"],
    &["flour", "potato", "cucumber"],
    &["lemon", "milk", "pasta"],
    &["quinoa", "butter", "lentils"],
    &["avocado", "tomato", "spinach"],
    &["basil", "sugar", "rice"],
    &["cheese", "soy sauce", "onion"],
    &["chicken", "chickpeas", "carrot"],
    &["potato", "bell pepper", "garlic"],
    &["olive oil", "broccoli", "flour"],
    &["tomato", "lemon", "tofu"],
    &["basil", "spinach", "rice"],
    &["avocado", "ginger", "broccoli"],
    &["butter", "pasta", "chickpeas"],
    &["lentils", "potato", "soy sauce"],
    &["egg", "chicken", "tomato"],
    &["cucumber", "cheese", "garlic"],
    &["milk", "basil", "bell pepper"],
    &["sugar", "avocado", "carrot"],
    &["onion", "flour", "quinoa"],
    &["olive oil", "spinach", "broccoli"],
    &["lemon", "butter", "basil"],
    &["rice", "chicken", "potato"],
    &["cheese", "tomato", "bell pepper"],
];

/// Query used for the single walkthrough at the start of a full run
pub const DEMO_QUERY: &[&str] = &["chicken", "cheese"];

/// Test query list for batch evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub version: u32,
    pub queries: Vec<Vec<String>>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            version: 1,
            queries: DEFAULT_QUERIES
                .iter()
                .map(|q| q.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

impl QueryConfig {
    /// Load a query list from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read query config from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            Error::Config(format!(
                "Invalid query config {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: QueryConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported config version: {}. Expected version 1",
                self.version
            )));
        }

        if self.queries.is_empty() {
            return Err(Error::Config("Query list cannot be empty".to_string()));
        }

        for (index, query) in self.queries.iter().enumerate() {
            if query.is_empty() {
                return Err(Error::Config(format!("Query #{} is empty", index + 1)));
            }
            if query.iter().any(|i| i.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "Query #{} contains an empty ingredient",
                    index + 1
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queries() {
        let config = QueryConfig::default();
        assert_eq!(config.queries.len(), 50);
        assert_eq!(config.queries[0], vec!["milk", "flour", "ginger"]);
        assert!(config.queries.iter().all(|q| q.len() == 3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let config = QueryConfig::from_yaml(
            r#"
version: 1
queries:
  - [rice, egg]
  - ["soy sauce"]
"#,
        )
        .unwrap();

        assert_eq!(config.queries.len(), 2);
        assert_eq!(config.queries[1], vec!["soy sauce"]);
    }

    #[test]
    fn test_reject_empty_query() {
        let result = QueryConfig::from_yaml("version: 1\nqueries:\n  - []\n");
        assert!(result.unwrap_err().to_string().contains("Query #1 is empty"));
    }

    #[test]
    fn test_reject_empty_list() {
        assert!(QueryConfig::from_yaml("version: 1\nqueries: []\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = QueryConfig::from_file("/nonexistent/queries.yaml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
