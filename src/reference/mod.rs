//! Reference data for biomarker evaluation
//!
//! One canonical table holds the healthy range, the per-direction
//! advisory messages, and the healthy default value for each biomarker.
//! The table is built once at startup and passed into the evaluators, so
//! tests can substitute alternate thresholds without touching the rules.

use crate::models::biomarker::Biomarker;
use crate::models::finding::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Healthy interval for a biomarker, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    /// Lowest healthy value
    pub min: f64,
    /// Highest healthy value
    pub max: f64,
}

impl ReferenceRange {
    /// Create a range from its bounds
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a value lies within the healthy interval
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether a value falls below the healthy minimum
    #[must_use]
    pub fn is_below(&self, value: f64) -> bool {
        value < self.min
    }

    /// Whether a value exceeds the healthy maximum
    #[must_use]
    pub fn is_above(&self, value: f64) -> bool {
        value > self.max
    }
}

/// Advisory messages for a biomarker, one per direction
#[derive(Debug, Clone, Copy)]
struct AdvisoryMessages {
    low: &'static str,
    normal: &'static str,
    high: &'static str,
}

/// Canonical reference data, keyed by biomarker
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    ranges: HashMap<Biomarker, ReferenceRange>,
    messages: HashMap<Biomarker, AdvisoryMessages>,
    defaults: HashMap<Biomarker, f64>,
}

impl ReferenceTable {
    /// Build the canonical table.
    ///
    /// Ranges follow the insight-engine reference set; defaults are the
    /// values a healthy adult would be expected to report and are used
    /// when ingestion is asked to fill in missing measurements. The
    /// absolute neutrophil count has no registered default.
    #[must_use]
    pub fn canonical() -> Self {
        let mut table = Self::default();

        table.set_range(Biomarker::Hemoglobin, 13.5, 17.5);
        table.set_range(Biomarker::PackedCellVolume, 41.0, 53.0);
        table.set_range(Biomarker::TotalLeucocyteCount, 4000.0, 11000.0);
        table.set_range(Biomarker::RbcCount, 4.7, 6.1);
        table.set_range(Biomarker::Mcv, 80.0, 100.0);
        table.set_range(Biomarker::Mch, 27.0, 33.0);
        table.set_range(Biomarker::Mchc, 32.0, 36.0);
        table.set_range(Biomarker::PlateletCount, 150_000.0, 450_000.0);
        table.set_range(Biomarker::Mpv, 7.5, 11.5);
        table.set_range(Biomarker::Rdw, 11.5, 14.5);
        table.set_range(Biomarker::AbsoluteNeutrophilCount, 1500.0, 8000.0);

        table.messages.insert(
            Biomarker::Hemoglobin,
            AdvisoryMessages {
                low: "Slightly low — consider iron-rich foods like spinach, lentils, or red meat.",
                normal: "Normal. Oxygen-carrying capacity is healthy.",
                high: "Higher than normal — can be due to dehydration or smoking; monitor regularly.",
            },
        );
        table.messages.insert(
            Biomarker::TotalLeucocyteCount,
            AdvisoryMessages {
                low: "Low WBC count — immunity may be weakened; avoid infections.",
                normal: "Normal WBC count.",
                high: "Elevated WBC — possible infection or inflammation; monitor symptoms.",
            },
        );
        table.messages.insert(
            Biomarker::PlateletCount,
            AdvisoryMessages {
                low: "Low platelet count — risk of bleeding; avoid injuries.",
                normal: "Normal platelet count.",
                high: "High platelet count — monitor for clotting risk.",
            },
        );
        table.messages.insert(
            Biomarker::Mpv,
            AdvisoryMessages {
                low: "Low MPV — platelets are smaller than usual; consult doctor if persistent.",
                normal: "Normal MPV.",
                high: "High MPV — platelets are larger; could indicate clotting tendency.",
            },
        );

        table.defaults.insert(Biomarker::Hemoglobin, 13.5);
        table.defaults.insert(Biomarker::PackedCellVolume, 45.0);
        table.defaults.insert(Biomarker::TotalLeucocyteCount, 7000.0);
        table.defaults.insert(Biomarker::RbcCount, 5.0);
        table.defaults.insert(Biomarker::Mcv, 90.0);
        table.defaults.insert(Biomarker::Mch, 30.0);
        table.defaults.insert(Biomarker::Mchc, 34.0);
        table.defaults.insert(Biomarker::PlateletCount, 250_000.0);
        table.defaults.insert(Biomarker::Mpv, 10.0);
        table.defaults.insert(Biomarker::Rdw, 13.0);

        table
    }

    /// Register or replace the healthy range for a biomarker
    pub fn set_range(&mut self, biomarker: Biomarker, min: f64, max: f64) {
        self.ranges.insert(biomarker, ReferenceRange::new(min, max));
    }

    /// Get the healthy range for a biomarker, if registered
    #[must_use]
    pub fn range(&self, biomarker: Biomarker) -> Option<ReferenceRange> {
        self.ranges.get(&biomarker).copied()
    }

    /// Get the advisory message registered for a biomarker and direction.
    ///
    /// Only a subset of biomarkers carries tailored messages; callers
    /// fall back to a generic message for the rest.
    #[must_use]
    pub fn message(&self, biomarker: Biomarker, direction: Direction) -> Option<&'static str> {
        self.messages.get(&biomarker).map(|m| match direction {
            Direction::Increase => m.low,
            Direction::Normal => m.normal,
            Direction::Decrease => m.high,
        })
    }

    /// Get the healthy default value for a biomarker, if registered
    #[must_use]
    pub fn healthy_default(&self, biomarker: Biomarker) -> Option<f64> {
        self.defaults.get(&biomarker).copied()
    }
}
