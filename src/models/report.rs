//! Biomarker report model
//!
//! A `BiomarkerReport` is the immutable input to both evaluators: a
//! mapping from biomarker to measured value, built once per uploaded
//! report at the input boundary and never mutated by the engine.

use crate::error::ValueIssue;
use crate::models::biomarker::Biomarker;
use std::collections::HashMap;

/// One report's worth of biomarker measurements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BiomarkerReport {
    values: HashMap<Biomarker, f64>,
}

impl BiomarkerReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from externally named values.
    ///
    /// Names outside the vocabulary are skipped; reports routinely carry
    /// fields the engine does not evaluate. Values that are not finite, or
    /// that are negative (no blood measurement can be), fail validation
    /// for that biomarker only: a `ValueIssue` is recorded and the rest of
    /// the report is kept. Duplicate names keep the last value seen.
    pub fn from_named_values<I, S>(values: I) -> (Self, Vec<ValueIssue>)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut report = Self::new();
        let mut issues = Vec::new();

        for (name, value) in values {
            let name = name.as_ref();
            let Some(biomarker) = Biomarker::parse(name) else {
                log::debug!("Ignoring unknown biomarker name: {name}");
                continue;
            };

            if !value.is_finite() {
                issues.push(ValueIssue::new(
                    name,
                    value.to_string(),
                    "value is not a finite number",
                ));
                continue;
            }
            if value < 0.0 {
                issues.push(ValueIssue::new(
                    name,
                    value.to_string(),
                    "negative value is not physically possible",
                ));
                continue;
            }

            report.values.insert(biomarker, value);
        }

        (report, issues)
    }

    /// Set a single measurement, replacing any previous value
    pub fn insert(&mut self, biomarker: Biomarker, value: f64) {
        self.values.insert(biomarker, value);
    }

    /// Get the measured value for a biomarker, if present
    #[must_use]
    pub fn get(&self, biomarker: Biomarker) -> Option<f64> {
        self.values.get(&biomarker).copied()
    }

    /// Whether a biomarker was measured in this report
    #[must_use]
    pub fn contains(&self, biomarker: Biomarker) -> bool {
        self.values.contains_key(&biomarker)
    }

    /// Number of measured biomarkers
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the report carries no measurements at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Biomarker, f64)> for BiomarkerReport {
    fn from_iter<I: IntoIterator<Item = (Biomarker, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_named_values_skips_unknown_names() {
        let (report, issues) =
            BiomarkerReport::from_named_values([("Foo", 5.0), ("Hemoglobin", 14.0)]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get(Biomarker::Hemoglobin), Some(14.0));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_from_named_values_collects_issues_for_bad_values() {
        let (report, issues) = BiomarkerReport::from_named_values([
            ("Hemoglobin", -2.0),
            ("MCV", f64::NAN),
            ("Platelet Count", 250000.0),
        ]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get(Biomarker::PlateletCount), Some(250000.0));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].name, "Hemoglobin");
        assert_eq!(issues[1].name, "MCV");
    }

    #[test]
    fn test_from_named_values_keeps_last_duplicate() {
        let (report, _) =
            BiomarkerReport::from_named_values([("Hemoglobin", 10.0), ("Haemoglobin", 14.5)]);

        assert_eq!(report.get(Biomarker::Hemoglobin), Some(14.5));
    }
}
