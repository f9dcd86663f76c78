//! Finding models
//!
//! Findings are the output units of the engine. Three logical variants
//! are kept distinct internally (range classification, disease
//! likelihood, lifestyle advice) and collapse to one presentation shape
//! (`RenderedFinding`) only at the rendering boundary.

use crate::models::biomarker::Biomarker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory message attached to every disease finding
pub const CONSULT_DOCTOR: &str = "Please consult your doctor for further evaluation.";

/// Title under which lifestyle advice is presented
pub const LIFESTYLE_TITLE: &str = "Lifestyle / Preventive Tip";

/// Direction a biomarker value should move relative to its healthy range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Value is below the healthy minimum
    Increase,
    /// Value is above the healthy maximum
    Decrease,
    /// Value is within the healthy range
    Normal,
}

/// Heuristic likelihood tier for a disease finding.
///
/// A coarse confidence label, not a statistical probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Likelihood {
    /// Supporting biomarker crossed its screening threshold
    Medium = 1,
    /// Primary and supporting biomarkers both crossed their thresholds
    High = 2,
}

impl Likelihood {
    /// Get a descriptive name for this likelihood tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Conditions covered by the heuristic disease rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disease {
    /// Low hemoglobin with microcytic or hypochromic red cells
    IronDeficiencyAnemia,
    /// Elevated leucocyte and neutrophil counts
    BacterialInfection,
    /// Elevated platelet count and platelet volume
    ClottingDisorderRisk,
}

impl Disease {
    /// Get the display name for this condition
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::IronDeficiencyAnemia => "Iron-deficiency Anemia",
            Self::BacterialInfection => "Bacterial Infection",
            Self::ClottingDisorderRisk => "Clotting Disorder Risk",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Range classification for a single biomarker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFinding {
    /// The classified biomarker
    pub biomarker: Biomarker,
    /// Measured value
    pub value: f64,
    /// Healthy minimum (inclusive)
    pub min: f64,
    /// Healthy maximum (inclusive)
    pub max: f64,
    /// Which way the value should move, if at all
    pub direction: Direction,
    /// Directional instruction; `None` when the value is within range
    pub advice: Option<String>,
    /// Biomarker-specific informative message for the observed direction
    pub note: String,
}

/// One fired disease-likelihood rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseFinding {
    /// The suspected condition
    pub disease: Disease,
    /// Heuristic likelihood tier
    pub likelihood: Likelihood,
    /// Fixed advisory message
    pub message: String,
}

impl DiseaseFinding {
    /// Create a finding for a fired rule
    #[must_use]
    pub fn new(disease: Disease, likelihood: Likelihood) -> Self {
        Self {
            disease,
            likelihood,
            message: CONSULT_DOCTOR.to_string(),
        }
    }
}

/// One piece of lifestyle / preventive advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleFinding {
    /// Presentation title
    pub title: String,
    /// Advice text
    pub message: String,
}

impl LifestyleFinding {
    /// Create a lifestyle tip with the standard title
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: LIFESTYLE_TITLE.to_string(),
            message: message.into(),
        }
    }
}

/// Any output unit of the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Finding {
    /// Per-biomarker range classification
    Range(RangeFinding),
    /// Disease-likelihood heuristic
    Disease(DiseaseFinding),
    /// Lifestyle / preventive advice
    Lifestyle(LifestyleFinding),
}

/// Presentation category for a rendered finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Needs the reader's attention
    Alert,
    /// Informational only
    Normal,
}

/// The flat shape every finding is rendered through for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedFinding {
    /// Alert or informational
    pub kind: FindingKind,
    /// Card title
    pub title: String,
    /// Short status line; empty for lifestyle tips
    pub status: String,
    /// Body text
    pub message: String,
}

impl Finding {
    /// Collapse this finding to the flat presentation shape
    #[must_use]
    pub fn render(&self) -> RenderedFinding {
        match self {
            Self::Disease(d) => RenderedFinding {
                kind: FindingKind::Alert,
                title: d.disease.display_name().to_string(),
                status: format!("Likelihood: {}", d.likelihood),
                message: d.message.clone(),
            },
            Self::Range(r) => {
                let in_range = r.direction == Direction::Normal;
                RenderedFinding {
                    kind: if in_range {
                        FindingKind::Normal
                    } else {
                        FindingKind::Alert
                    },
                    title: r.biomarker.display_name().to_string(),
                    status: if in_range {
                        "Within healthy range".to_string()
                    } else {
                        "Action recommended".to_string()
                    },
                    message: r.note.clone(),
                }
            }
            Self::Lifestyle(l) => RenderedFinding {
                kind: FindingKind::Normal,
                title: l.title.clone(),
                status: String::new(),
                message: l.message.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likelihood_ordering() {
        assert!(Likelihood::High > Likelihood::Medium);
    }

    #[test]
    fn test_disease_finding_renders_as_alert() {
        let finding = Finding::Disease(DiseaseFinding::new(
            Disease::BacterialInfection,
            Likelihood::High,
        ));
        let rendered = finding.render();

        assert_eq!(rendered.kind, FindingKind::Alert);
        assert_eq!(rendered.title, "Bacterial Infection");
        assert_eq!(rendered.status, "Likelihood: High");
        assert_eq!(rendered.message, CONSULT_DOCTOR);
    }

    #[test]
    fn test_lifestyle_finding_renders_without_status() {
        let finding = Finding::Lifestyle(LifestyleFinding::new("Drink water."));
        let rendered = finding.render();

        assert_eq!(rendered.kind, FindingKind::Normal);
        assert_eq!(rendered.title, LIFESTYLE_TITLE);
        assert!(rendered.status.is_empty());
    }
}
