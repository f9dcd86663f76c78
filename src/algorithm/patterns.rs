//! Pattern evaluation
//!
//! Inspects combinations of biomarkers against heuristic disease rules
//! and lifestyle-advice rules. Rules are evaluated independently in a
//! fixed order; a missing biomarker never satisfies a threshold.

use crate::models::biomarker::Biomarker;
use crate::models::finding::{Disease, DiseaseFinding, Likelihood, LifestyleFinding};
use crate::models::report::BiomarkerReport;

/// Thresholds for the disease and lifestyle rules.
///
/// Kept in one injectable struct so tests can exercise the rule logic
/// with alternate cut-offs.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRules {
    /// Hemoglobin below this suggests anemia (high tier, with red-cell support)
    pub hemoglobin_low: f64,
    /// MCV below this marks microcytic red cells
    pub mcv_low: f64,
    /// MCH below this marks hypochromic red cells
    pub mch_low: f64,
    /// Hemoglobin below this alone suggests anemia at the medium tier
    pub hemoglobin_screen: f64,
    /// TLC above this suggests infection (high tier, with neutrophil support)
    pub tlc_high: f64,
    /// Neutrophil count above this supports a bacterial infection
    pub neutrophils_high: f64,
    /// TLC above this alone suggests infection at the medium tier
    pub tlc_screen: f64,
    /// Platelet count above this suggests clotting risk (high tier, with MPV support)
    pub platelets_high: f64,
    /// MPV above this supports a clotting tendency
    pub mpv_high: f64,
    /// Platelet count above this alone suggests clotting risk at the medium tier
    pub platelets_screen: f64,
}

impl Default for PatternRules {
    fn default() -> Self {
        Self {
            hemoglobin_low: 12.0,
            mcv_low: 80.0,
            mch_low: 27.0,
            hemoglobin_screen: 13.5,
            tlc_high: 11_000.0,
            neutrophils_high: 7_000.0,
            tlc_screen: 10_000.0,
            platelets_high: 400_000.0,
            mpv_high: 11.0,
            platelets_screen: 350_000.0,
        }
    }
}

/// Output of one pattern-evaluation pass
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFindings {
    /// Fired disease rules, in rule order
    pub diseases: Vec<DiseaseFinding>,
    /// Lifestyle advice, in rule order, baseline tip last
    pub lifestyle: Vec<LifestyleFinding>,
}

/// Evaluate all disease and lifestyle rules against a report.
///
/// Disease rules are not mutually exclusive; each contributes at most
/// one finding, taking the higher-likelihood branch first. Lifestyle
/// rules are additive, and the baseline tip is always appended last.
#[must_use]
pub fn evaluate(report: &BiomarkerReport, rules: &PatternRules) -> PatternFindings {
    let findings = PatternFindings {
        diseases: disease_findings(report, rules),
        lifestyle: lifestyle_findings(report, rules),
    };

    log::debug!(
        "Pattern evaluation fired {} disease rules and {} lifestyle tips",
        findings.diseases.len(),
        findings.lifestyle.len()
    );

    findings
}

fn disease_findings(report: &BiomarkerReport, rules: &PatternRules) -> Vec<DiseaseFinding> {
    // Missing biomarkers must never fire a rule, so every comparison
    // goes through these and an absent value compares as false.
    let below = |b: Biomarker, threshold: f64| report.get(b).is_some_and(|v| v < threshold);
    let above = |b: Biomarker, threshold: f64| report.get(b).is_some_and(|v| v > threshold);

    let mut diseases = Vec::new();

    let anemia_support = below(Biomarker::Mcv, rules.mcv_low) || below(Biomarker::Mch, rules.mch_low);
    if below(Biomarker::Hemoglobin, rules.hemoglobin_low) && anemia_support {
        diseases.push(DiseaseFinding::new(
            Disease::IronDeficiencyAnemia,
            Likelihood::High,
        ));
    } else if below(Biomarker::Hemoglobin, rules.hemoglobin_screen) {
        diseases.push(DiseaseFinding::new(
            Disease::IronDeficiencyAnemia,
            Likelihood::Medium,
        ));
    }

    if above(Biomarker::TotalLeucocyteCount, rules.tlc_high)
        && above(Biomarker::AbsoluteNeutrophilCount, rules.neutrophils_high)
    {
        diseases.push(DiseaseFinding::new(
            Disease::BacterialInfection,
            Likelihood::High,
        ));
    } else if above(Biomarker::TotalLeucocyteCount, rules.tlc_screen) {
        diseases.push(DiseaseFinding::new(
            Disease::BacterialInfection,
            Likelihood::Medium,
        ));
    }

    if above(Biomarker::PlateletCount, rules.platelets_high)
        && above(Biomarker::Mpv, rules.mpv_high)
    {
        diseases.push(DiseaseFinding::new(
            Disease::ClottingDisorderRisk,
            Likelihood::High,
        ));
    } else if above(Biomarker::PlateletCount, rules.platelets_screen) {
        diseases.push(DiseaseFinding::new(
            Disease::ClottingDisorderRisk,
            Likelihood::Medium,
        ));
    }

    diseases
}

fn lifestyle_findings(report: &BiomarkerReport, rules: &PatternRules) -> Vec<LifestyleFinding> {
    let below = |b: Biomarker, threshold: f64| report.get(b).is_some_and(|v| v < threshold);
    let above = |b: Biomarker, threshold: f64| report.get(b).is_some_and(|v| v > threshold);

    let mut advice = Vec::new();

    if below(Biomarker::Hemoglobin, rules.hemoglobin_low) {
        advice.push(LifestyleFinding::new(
            "Increase iron-rich foods and vitamin C for better absorption.",
        ));
    }
    if above(Biomarker::TotalLeucocyteCount, rules.tlc_high) {
        advice.push(LifestyleFinding::new(
            "Monitor for infection symptoms like fever; consult a doctor if persistent.",
        ));
    }
    if above(Biomarker::PlateletCount, rules.platelets_high) {
        advice.push(LifestyleFinding::new(
            "Stay hydrated, avoid smoking, and consult a doctor for clotting risk.",
        ));
    }

    // Baseline tip is unconditional and always last.
    advice.push(LifestyleFinding::new(
        "Maintain balanced diet, exercise regularly, and schedule routine checkups.",
    ));

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PatternRules {
        PatternRules::default()
    }

    #[test]
    fn test_anemia_high_beats_medium() {
        let report: BiomarkerReport = [(Biomarker::Hemoglobin, 10.0), (Biomarker::Mcv, 70.0)]
            .into_iter()
            .collect();
        let findings = evaluate(&report, &rules());

        assert_eq!(findings.diseases.len(), 1);
        assert_eq!(findings.diseases[0].disease, Disease::IronDeficiencyAnemia);
        assert_eq!(findings.diseases[0].likelihood, Likelihood::High);
    }

    #[test]
    fn test_anemia_medium_from_screen_threshold() {
        let report: BiomarkerReport = [
            (Biomarker::Hemoglobin, 13.0),
            (Biomarker::Mcv, 90.0),
            (Biomarker::Mch, 30.0),
        ]
        .into_iter()
        .collect();
        let findings = evaluate(&report, &rules());

        assert_eq!(findings.diseases.len(), 1);
        assert_eq!(findings.diseases[0].likelihood, Likelihood::Medium);
    }

    #[test]
    fn test_anemia_high_via_mch_branch() {
        let report: BiomarkerReport = [(Biomarker::Hemoglobin, 11.0), (Biomarker::Mch, 20.0)]
            .into_iter()
            .collect();
        let findings = evaluate(&report, &rules());

        assert_eq!(findings.diseases[0].likelihood, Likelihood::High);
    }

    #[test]
    fn test_infection_requires_neutrophil_support_for_high() {
        let report: BiomarkerReport = [
            (Biomarker::TotalLeucocyteCount, 12_000.0),
            (Biomarker::AbsoluteNeutrophilCount, 8_000.0),
        ]
        .into_iter()
        .collect();
        let findings = evaluate(&report, &rules());

        assert_eq!(findings.diseases.len(), 1);
        assert_eq!(findings.diseases[0].disease, Disease::BacterialInfection);
        assert_eq!(findings.diseases[0].likelihood, Likelihood::High);

        // Without the neutrophil reading the same TLC only screens Medium.
        let report: BiomarkerReport = [(Biomarker::TotalLeucocyteCount, 12_000.0)]
            .into_iter()
            .collect();
        let findings = evaluate(&report, &rules());
        assert_eq!(findings.diseases[0].likelihood, Likelihood::Medium);
    }

    #[test]
    fn test_clotting_high_adds_hydration_tip() {
        let report: BiomarkerReport = [(Biomarker::PlateletCount, 500_000.0), (Biomarker::Mpv, 12.0)]
            .into_iter()
            .collect();
        let findings = evaluate(&report, &rules());

        assert_eq!(findings.diseases.len(), 1);
        assert_eq!(findings.diseases[0].disease, Disease::ClottingDisorderRisk);
        assert_eq!(findings.diseases[0].likelihood, Likelihood::High);
        assert_eq!(findings.lifestyle.len(), 2);
        assert!(findings.lifestyle[0].message.contains("hydrated"));
    }

    #[test]
    fn test_multiple_diseases_may_fire_together() {
        let report: BiomarkerReport = [
            (Biomarker::Hemoglobin, 10.0),
            (Biomarker::Mcv, 70.0),
            (Biomarker::TotalLeucocyteCount, 12_000.0),
        ]
        .into_iter()
        .collect();
        let findings = evaluate(&report, &rules());

        assert_eq!(findings.diseases.len(), 2);
        assert_eq!(findings.diseases[0].disease, Disease::IronDeficiencyAnemia);
        assert_eq!(findings.diseases[1].disease, Disease::BacterialInfection);
    }

    #[test]
    fn test_empty_report_keeps_only_baseline_tip() {
        let report = BiomarkerReport::new();
        let findings = evaluate(&report, &rules());

        assert!(findings.diseases.is_empty());
        assert_eq!(findings.lifestyle.len(), 1);
        assert!(findings.lifestyle[0].message.contains("balanced diet"));
    }

    #[test]
    fn test_exact_threshold_does_not_fire() {
        let report: BiomarkerReport = [
            (Biomarker::Hemoglobin, 13.5),
            (Biomarker::TotalLeucocyteCount, 11_000.0),
        ]
        .into_iter()
        .collect();
        let findings = evaluate(&report, &rules());

        assert!(findings.diseases.is_empty());
    }
}
