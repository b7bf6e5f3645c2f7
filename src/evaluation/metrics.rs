use crate::error::{Error, Result};
use tracing::warn;

/// Ground-truth relevance used by the walkthrough run
pub const DEMO_TRUTH: &[u8] = &[1, 1, 0, 0, 0];
/// Predicted relevance used by the walkthrough run
pub const DEMO_PREDICTED: &[u8] = &[1, 1, 1, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ClassificationMetrics {
    /// Labelled values in display order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1-Score", self.f1),
        ]
    }
}

/// Binary precision, recall and F1 with 1 as the positive label.
///
/// A ratio with a zero denominator is reported as 0.0.
pub fn evaluate(truth: &[u8], predicted: &[u8]) -> Result<ClassificationMetrics> {
    if truth.len() != predicted.len() {
        return Err(Error::Validation(format!(
            "Label sequences differ in length: {} vs {}",
            truth.len(),
            predicted.len()
        )));
    }

    if let Some(bad) = truth.iter().chain(predicted).find(|&&v| v > 1) {
        return Err(Error::Validation(format!(
            "Labels must be 0 or 1, got {bad}"
        )));
    }

    let (mut tp, mut fp, mut fn_) = (0usize, 0usize, 0usize);
    for (&t, &p) in truth.iter().zip(predicted) {
        match (t, p) {
            (1, 1) => tp += 1,
            (0, 1) => fp += 1,
            (1, 0) => fn_ += 1,
            _ => {}
        }
    }

    Ok(ClassificationMetrics {
        precision: ratio("Precision", tp, tp + fp),
        recall: ratio("Recall", tp, tp + fn_),
        f1: ratio("F1-Score", 2 * tp, 2 * tp + fp + fn_),
    })
}

/// Parse a comma-separated label list such as `1,0,1`
pub fn parse_labels(text: &str) -> Result<Vec<u8>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| Error::Validation(format!("Invalid label: {s}")))
        })
        .collect()
}

fn ratio(name: &str, numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        warn!("{} is ill-defined with no positive samples; reporting 0.0", name);
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_labels() {
        let metrics = evaluate(DEMO_TRUTH, DEMO_PREDICTED).unwrap();

        assert!((metrics.precision - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.recall, 1.0);
        assert!((metrics.f1 - 0.8).abs() < 1e-9);
        assert_eq!(format!("{:.2}", metrics.precision), "0.67");
    }

    #[test]
    fn test_no_predicted_positives() {
        let metrics = evaluate(&[1, 0, 1], &[0, 0, 0]).unwrap();
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = evaluate(&[1, 0], &[1]);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_non_binary_label() {
        assert!(evaluate(&[1, 2], &[1, 0]).is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_labels("1, 1,0,").unwrap(), vec![1, 1, 0]);
        assert!(parse_labels("1,x").is_err());
    }

    #[test]
    fn test_entries_order() {
        let metrics = evaluate(&[1], &[1]).unwrap();
        let names: Vec<&str> = metrics.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Precision", "Recall", "F1-Score"]);
    }
}
