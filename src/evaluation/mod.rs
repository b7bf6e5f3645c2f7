// Batch query evaluation and illustrative classification metrics

pub mod batch;
pub mod metrics;

pub use batch::{BatchEvaluator, BatchSummary, QueryResult};
pub use metrics::{evaluate, parse_labels, ClassificationMetrics};
