//! Report ingestion boundary
//!
//! The upstream collaborator extracts biomarkers from an uploaded lab
//! report and hands them over as a JSON array of name/value records.
//! This module translates that document into a `BiomarkerReport`,
//! collecting per-value problems instead of failing the whole report.

use crate::error::{InsightError, Result, ValueIssue};
use crate::models::biomarker::Biomarker;
use crate::models::report::BiomarkerReport;
use crate::reference::ReferenceTable;
use serde::Deserialize;

/// One record of the extracted-features document
#[derive(Debug, Deserialize)]
struct FeatureRecord {
    #[serde(rename = "Name")]
    name: String,
    /// Extractors are inconsistent about numeric typing, so the raw
    /// JSON value is kept and coerced here.
    #[serde(rename = "Value")]
    value: serde_json::Value,
}

/// Options for report ingestion
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Fill biomarkers missing from the document with the table's
    /// healthy default values instead of leaving them unmeasured
    pub fill_defaults: bool,
}

/// Parse an extracted-features JSON document into a biomarker report.
///
/// Expects an array of `{"Name": …, "Value": …}` records. Duplicate
/// names keep the last value. Values that are neither numbers nor
/// numeric strings become `ValueIssue`s, as do out-of-domain numbers;
/// the rest of the document is still ingested.
pub fn parse_features_json(
    document: &str,
    table: &ReferenceTable,
    options: IngestOptions,
) -> Result<(BiomarkerReport, Vec<ValueIssue>)> {
    let records: Vec<FeatureRecord> = serde_json::from_str(document)
        .map_err(|e| InsightError::Ingest(format!("malformed features document: {e}")))?;

    let mut named = Vec::with_capacity(records.len());
    let mut issues = Vec::new();

    for record in records {
        match coerce_numeric(&record.value) {
            Some(value) => named.push((record.name, value)),
            None => {
                issues.push(ValueIssue::new(
                    record.name,
                    record.value.to_string(),
                    "value is not numeric",
                ));
            }
        }
    }

    let (mut report, value_issues) = BiomarkerReport::from_named_values(named);
    issues.extend(value_issues);

    if options.fill_defaults {
        for biomarker in Biomarker::ALL {
            if report.contains(biomarker) {
                continue;
            }
            if let Some(default) = table.healthy_default(biomarker) {
                log::debug!("Filling missing {biomarker} with healthy default {default}");
                report.insert(biomarker, default);
            }
        }
    }

    Ok((report, issues))
}

fn coerce_numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
