//! Range classification
//!
//! Compares each measured biomarker against its healthy reference range
//! and emits a directional finding. The loop is driven entirely by the
//! reference table, so adding a biomarker means adding a table row, not
//! another branch.

use crate::models::biomarker::Biomarker;
use crate::models::finding::{Direction, RangeFinding};
use crate::models::report::BiomarkerReport;
use crate::reference::ReferenceTable;

/// Fallback messages when no tailored advisory is registered
const GENERIC_LOW: &str = "Low value detected";
const GENERIC_NORMAL: &str = "Normal value";
const GENERIC_HIGH: &str = "High value detected";

/// Classify every measured biomarker against the reference table.
///
/// Iterates the vocabulary in canonical order. Biomarkers absent from
/// the report are skipped without a finding; input schemas are routinely
/// partial. Boundary values are classified as within range, since the
/// healthy interval is closed on both ends.
#[must_use]
pub fn classify(report: &BiomarkerReport, table: &ReferenceTable) -> Vec<RangeFinding> {
    let mut findings = Vec::new();

    for biomarker in Biomarker::ALL {
        let Some(range) = table.range(biomarker) else {
            continue;
        };
        let Some(value) = report.get(biomarker) else {
            log::debug!("{biomarker} not present in report, skipping range check");
            continue;
        };

        let direction = if range.is_below(value) {
            Direction::Increase
        } else if range.is_above(value) {
            Direction::Decrease
        } else {
            Direction::Normal
        };

        let advice = match direction {
            Direction::Increase => Some(format!(
                "Increase {biomarker}; minimum healthy value is {}.",
                range.min
            )),
            Direction::Decrease => Some(format!(
                "Decrease {biomarker}; maximum healthy value is {}.",
                range.max
            )),
            Direction::Normal => None,
        };

        let note = table
            .message(biomarker, direction)
            .unwrap_or(match direction {
                Direction::Increase => GENERIC_LOW,
                Direction::Normal => GENERIC_NORMAL,
                Direction::Decrease => GENERIC_HIGH,
            })
            .to_string();

        findings.push(RangeFinding {
            biomarker,
            value,
            min: range.min,
            max: range.max,
            direction,
            advice,
            note,
        });
    }

    log::debug!(
        "Range classification produced {} findings from {} measurements",
        findings.len(),
        report.len()
    );

    findings
}
