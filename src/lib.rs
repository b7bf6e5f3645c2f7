pub mod config;
pub mod error;

// Recipe collection loading
pub mod dataset;

// Expansion, scoring and ranking
pub mod matcher;

// Batch evaluation and metrics
pub mod evaluation;

// Report serialization
pub mod report;

pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
