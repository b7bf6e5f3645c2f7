use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Ingredient expansion table as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionConfig {
    pub version: u32,
    pub expansions: BTreeMap<String, Vec<String>>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        let expansions: BTreeMap<String, Vec<String>> = [
            ("tomato", ["basil", "olive oil", "cheese"]),
            ("chicken", ["garlic", "flour", "potato"]),
            ("pasta", ["cheese", "flour", "olive oil"]),
            ("lentils", ["tofu", "carrot", "spinach"]),
            ("quinoa", ["lemon", "avocado", "chickpeas"]),
        ]
        .into_iter()
        .map(|(key, related)| {
            (
                key.to_string(),
                related.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect();

        Self {
            version: 1,
            expansions,
        }
    }
}

impl ExpansionConfig {
    /// Load an expansion table from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read expansion config from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            Error::Config(format!(
                "Invalid expansion config {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ExpansionConfig = serde_yaml::from_str(content)?;
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

        for (key, related) in &self.expansions {
            if key.trim().is_empty() {
                return Err(Error::Config(
                    "Expansion key cannot be empty".to_string(),
                ));
            }

            if related.iter().any(|r| r.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "Expansion for '{key}' contains an empty ingredient"
                )));
            }
        }

        Ok(())
    }
}
