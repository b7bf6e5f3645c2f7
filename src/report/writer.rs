use crate::dataset::models::SCORE_COLUMN;
use crate::error::{Error, Result};
use crate::matcher::ScoredRecipe;
use crate::report::Value;
use std::fs;
use std::path::Path;
use tracing::info;

const JSON_INDENT: usize = 4;

/// Write the ranked collection with every input column plus the score
pub fn write_ranked_csv(path: &Path, headers: &[String], ranked: &[ScoredRecipe<'_>]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(headers.iter().map(String::as_str).chain([SCORE_COLUMN]))?;
    for scored in ranked {
        let score = format_score(scored.score);
        writer.write_record(
            scored
                .recipe
                .fields
                .iter()
                .map(String::as_str)
                .chain([score.as_str()]),
        )?;
    }
    writer.flush()?;

    info!("Wrote {} ranked recipes to {}", ranked.len(), path.display());
    Ok(())
}

/// Write the report as-is; missing cells appear as `NaN`
pub fn write_raw_report(path: &Path, report: &Value) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, report.to_lenient_json(JSON_INDENT))?;
    info!("Wrote raw report to {}", path.display());
    Ok(())
}

/// Write the report as strict JSON with every NaN replaced by null
pub fn write_fixed_report(path: &Path, report: &Value) -> Result<()> {
    let fixed = report.clone().replace_nan_with_null();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(&fixed, &mut serializer)
        .map_err(|e| Error::Report(format!("Failed to serialize fixed report: {e}")))?;

    ensure_parent(path)?;
    fs::write(path, buf)?;
    info!("Wrote fixed report to {}", path.display());
    Ok(())
}

/// Scores keep one decimal place when whole (`100.0`), otherwise up to two
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
