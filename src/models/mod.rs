//! Data models for the insight engine
//!
//! The biomarker vocabulary, the per-report measurement mapping, and the
//! finding types the evaluators emit.

pub mod biomarker;
pub mod finding;
pub mod report;

pub use biomarker::Biomarker;
pub use finding::{
    Direction, Disease, DiseaseFinding, Finding, FindingKind, Likelihood, LifestyleFinding,
    RangeFinding, RenderedFinding,
};
pub use report::BiomarkerReport;
