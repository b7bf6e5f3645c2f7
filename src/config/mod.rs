pub mod expansion;
pub mod queries;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use expansion::ExpansionConfig;
pub use queries::QueryConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub output: OutputConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub recipes_path: PathBuf,
    pub expansion_config_path: Option<PathBuf>,
    pub queries_config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub ranked_path: PathBuf,
    pub report_path: PathBuf,
    pub fixed_report_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub top_k: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let recipes_path = std::env::var("RECIPES_PATH")
            .unwrap_or_else(|_| "data/finalrecipedataset.csv".to_string())
            .into();

        let expansion_config_path = std::env::var("EXPANSION_CONFIG_PATH").ok().map(PathBuf::from);
        let queries_config_path = std::env::var("QUERIES_CONFIG_PATH").ok().map(PathBuf::from);

        let ranked_path = std::env::var("RANKED_OUTPUT_PATH")
            .unwrap_or_else(|_| "ranked_recipes.csv".to_string())
            .into();

        let report_path = std::env::var("REPORT_PATH")
            .unwrap_or_else(|_| "query_results.json".to_string())
            .into();

        let fixed_report_path = std::env::var("FIXED_REPORT_PATH")
            .unwrap_or_else(|_| "query_results_fixed.json".to_string())
            .into();

        let top_k = std::env::var("TOP_K")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid TOP_K value".to_string()))?;

        Ok(Settings {
            dataset: DatasetConfig {
                recipes_path,
                expansion_config_path,
                queries_config_path,
            },
            output: OutputConfig {
                ranked_path,
                report_path,
                fixed_report_path,
            },
            ranking: RankingConfig { top_k },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.ranking.top_k == 0 {
            return Err(Error::Config("TOP_K must be non-zero".to_string()));
        }

        if self.output.report_path == self.output.fixed_report_path {
            return Err(Error::Config(
                "Report and fixed report paths must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Expansion table from the configured YAML file, or the built-in one
    pub fn load_expansion(&self) -> Result<ExpansionConfig> {
        match &self.dataset.expansion_config_path {
            Some(path) => ExpansionConfig::from_file(path),
            None => Ok(ExpansionConfig::default()),
        }
    }

    /// Test queries from the configured YAML file, or the built-in list
    pub fn load_queries(&self) -> Result<QueryConfig> {
        match &self.dataset.queries_config_path {
            Some(path) => QueryConfig::from_file(path),
            None => Ok(QueryConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            dataset: DatasetConfig {
                recipes_path: "recipes.csv".into(),
                expansion_config_path: None,
                queries_config_path: None,
            },
            output: OutputConfig {
                ranked_path: "ranked.csv".into(),
                report_path: "report.json".into(),
                fixed_report_path: "report_fixed.json".into(),
            },
            ranking: RankingConfig { top_k: 5 },
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = settings();
        assert!(settings.validate().is_ok());

        settings.ranking.top_k = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_report_paths_must_differ() {
        let mut settings = settings();
        settings.output.fixed_report_path = settings.output.report_path.clone();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_builtin_tables_used_without_paths() {
        let settings = settings();
        assert_eq!(settings.load_expansion().unwrap().expansions.len(), 5);
        assert_eq!(settings.load_queries().unwrap().queries.len(), 50);
    }
}
