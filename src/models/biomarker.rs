//! Biomarker vocabulary
//!
//! This module defines the closed set of complete-blood-count biomarkers
//! the engine understands. External names are free-form strings; they are
//! translated into `Biomarker` variants at the input boundary so that a
//! typo cannot silently leak into the rule tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete-blood-count biomarker supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biomarker {
    /// Hemoglobin (g/dL)
    Hemoglobin,
    /// Packed cell volume / hematocrit (%)
    PackedCellVolume,
    /// Total leucocyte count (cells/µL)
    TotalLeucocyteCount,
    /// Red blood cell count (million/µL)
    RbcCount,
    /// Mean corpuscular volume (fL)
    Mcv,
    /// Mean corpuscular hemoglobin (pg)
    Mch,
    /// Mean corpuscular hemoglobin concentration (g/dL)
    Mchc,
    /// Platelet count (cells/µL)
    PlateletCount,
    /// Mean platelet volume (fL)
    Mpv,
    /// Red cell distribution width (%)
    Rdw,
    /// Absolute neutrophil count (cells/µL)
    AbsoluteNeutrophilCount,
}

impl Biomarker {
    /// All supported biomarkers, in canonical report order
    pub const ALL: [Self; 11] = [
        Self::Hemoglobin,
        Self::PackedCellVolume,
        Self::TotalLeucocyteCount,
        Self::RbcCount,
        Self::Mcv,
        Self::Mch,
        Self::Mchc,
        Self::PlateletCount,
        Self::Mpv,
        Self::Rdw,
        Self::AbsoluteNeutrophilCount,
    ];

    /// Translate a free-form external name into a biomarker.
    ///
    /// Lab reports are inconsistent about naming; both British and
    /// American spellings and the common abbreviations are accepted.
    /// Returns `None` for names outside the vocabulary, which callers
    /// treat as "ignore this field".
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "hemoglobin" | "haemoglobin" | "hb" => Some(Self::Hemoglobin),
            "packed cell volume" | "pcv" | "hematocrit" | "haematocrit" => {
                Some(Self::PackedCellVolume)
            }
            "total leucocyte count (tlc)" | "total leucocyte count" | "tlc" => {
                Some(Self::TotalLeucocyteCount)
            }
            "rbc count" | "rbc" => Some(Self::RbcCount),
            "mcv" => Some(Self::Mcv),
            "mch" => Some(Self::Mch),
            "mchc" => Some(Self::Mchc),
            "platelet count" | "platelets" => Some(Self::PlateletCount),
            "mpv" => Some(Self::Mpv),
            "rdw" => Some(Self::Rdw),
            "absolute neutrophil count" | "anc" => Some(Self::AbsoluteNeutrophilCount),
            _ => None,
        }
    }

    /// Get the canonical display name for this biomarker
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hemoglobin => "Hemoglobin",
            Self::PackedCellVolume => "Packed Cell Volume",
            Self::TotalLeucocyteCount => "Total Leucocyte Count (TLC)",
            Self::RbcCount => "RBC Count",
            Self::Mcv => "MCV",
            Self::Mch => "MCH",
            Self::Mchc => "MCHC",
            Self::PlateletCount => "Platelet Count",
            Self::Mpv => "MPV",
            Self::Rdw => "RDW",
            Self::AbsoluteNeutrophilCount => "Absolute Neutrophil Count",
        }
    }
}

impl fmt::Display for Biomarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_spelling_variants() {
        assert_eq!(Biomarker::parse("Hemoglobin"), Some(Biomarker::Hemoglobin));
        assert_eq!(Biomarker::parse("Haemoglobin"), Some(Biomarker::Hemoglobin));
        assert_eq!(Biomarker::parse("  hb "), Some(Biomarker::Hemoglobin));
    }

    #[test]
    fn test_parse_accepts_abbreviations() {
        assert_eq!(
            Biomarker::parse("TLC"),
            Some(Biomarker::TotalLeucocyteCount)
        );
        assert_eq!(
            Biomarker::parse("Total Leucocyte Count (TLC)"),
            Some(Biomarker::TotalLeucocyteCount)
        );
        assert_eq!(Biomarker::parse("PCV"), Some(Biomarker::PackedCellVolume));
        assert_eq!(
            Biomarker::parse("ANC"),
            Some(Biomarker::AbsoluteNeutrophilCount)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Biomarker::parse("Foo"), None);
        assert_eq!(Biomarker::parse(""), None);
        assert_eq!(Biomarker::parse("Vitamin D"), None);
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(Biomarker::PlateletCount.to_string(), "Platelet Count");
        assert_eq!(
            Biomarker::TotalLeucocyteCount.to_string(),
            "Total Leucocyte Count (TLC)"
        );
    }
}
