//! Report assembly
//!
//! Runs both evaluators over one biomarker report and concatenates
//! their findings into the ordered list the presentation layer renders:
//! disease findings first, then per-biomarker range findings, then
//! lifestyle advice.

use crate::algorithm::{patterns, range};
use crate::config::InterpreterConfig;
use crate::error::ValueIssue;
use crate::models::finding::{Finding, RenderedFinding};
use crate::models::report::BiomarkerReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The assembled output of one evaluation pass
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
    /// Ordered findings: diseases, then ranges, then lifestyle
    pub findings: Vec<Finding>,
    /// Per-value validation problems collected at ingestion
    pub issues: Vec<ValueIssue>,
}

impl InsightReport {
    /// Collapse every finding to the flat presentation shape
    #[must_use]
    pub fn rendered(&self) -> Vec<RenderedFinding> {
        self.findings.iter().map(Finding::render).collect()
    }
}

/// Evaluate a biomarker report and assemble the ordered finding list.
///
/// Pure apart from the timestamp: the findings are a function of the
/// report and the configuration alone. Each sub-list keeps its internal
/// order; no sorting or deduplication happens across categories.
#[must_use]
pub fn build_report(report: &BiomarkerReport, config: &InterpreterConfig) -> InsightReport {
    build_report_with_issues(report, Vec::new(), config)
}

/// Like [`build_report`], carrying ingestion issues through to the output
#[must_use]
pub fn build_report_with_issues(
    report: &BiomarkerReport,
    issues: Vec<ValueIssue>,
    config: &InterpreterConfig,
) -> InsightReport {
    log::info!("Evaluating report with {} measurements", report.len());

    let pattern = patterns::evaluate(report, &config.rules);
    let ranges = range::classify(report, &config.table);

    let mut findings =
        Vec::with_capacity(pattern.diseases.len() + ranges.len() + pattern.lifestyle.len());
    findings.extend(pattern.diseases.into_iter().map(Finding::Disease));
    findings.extend(ranges.into_iter().map(Finding::Range));
    findings.extend(pattern.lifestyle.into_iter().map(Finding::Lifestyle));

    if !issues.is_empty() {
        log::warn!("{} value(s) failed validation and were skipped", issues.len());
    }

    InsightReport {
        generated_at: Utc::now(),
        findings,
        issues,
    }
}

/// Evaluate externally named values end to end.
///
/// Convenience entry point for callers holding the raw name/value pairs
/// of a parsed report: builds the biomarker mapping at the boundary,
/// collecting validation issues, and assembles the insight report.
#[must_use]
pub fn interpret_named_values<I, S>(values: I, config: &InterpreterConfig) -> InsightReport
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let (report, issues) = BiomarkerReport::from_named_values(values);
    build_report_with_issues(&report, issues, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::biomarker::Biomarker;

    #[test]
    fn test_findings_keep_category_order() {
        let report: BiomarkerReport = [(Biomarker::Hemoglobin, 10.0), (Biomarker::Mcv, 70.0)]
            .into_iter()
            .collect();
        let insight = build_report(&report, &InterpreterConfig::default());

        // One disease, two range findings, two lifestyle tips.
        assert_eq!(insight.findings.len(), 5);
        assert!(matches!(insight.findings[0], Finding::Disease(_)));
        assert!(matches!(insight.findings[1], Finding::Range(_)));
        assert!(matches!(insight.findings[2], Finding::Range(_)));
        assert!(matches!(insight.findings[3], Finding::Lifestyle(_)));
        assert!(matches!(insight.findings[4], Finding::Lifestyle(_)));
    }

    #[test]
    fn test_empty_report_yields_baseline_tip_only() {
        let insight = build_report(&BiomarkerReport::new(), &InterpreterConfig::default());

        assert_eq!(insight.findings.len(), 1);
        assert!(matches!(insight.findings[0], Finding::Lifestyle(_)));
        assert!(insight.issues.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let report: BiomarkerReport = [
            (Biomarker::Hemoglobin, 11.0),
            (Biomarker::TotalLeucocyteCount, 12_000.0),
            (Biomarker::PlateletCount, 500_000.0),
            (Biomarker::Mpv, 12.0),
        ]
        .into_iter()
        .collect();
        let config = InterpreterConfig::default();

        let first = build_report(&report, &config);
        let second = build_report(&report, &config);

        assert_eq!(first.findings, second.findings);
        assert_eq!(first.issues, second.issues);
    }
}
