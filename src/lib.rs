//! A Rust library for interpreting complete blood count reports: each
//! biomarker is classified against a healthy reference range, and
//! combinations of biomarkers drive heuristic disease-likelihood and
//! lifestyle findings.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod reference;

// Re-export the most common types for easier use
// Core types
pub use config::InterpreterConfig;
pub use error::{InsightError, Result, ValueIssue};
pub use models::{
    Biomarker, BiomarkerReport, Direction, Disease, DiseaseFinding, Finding, FindingKind,
    Likelihood, LifestyleFinding, RangeFinding, RenderedFinding,
};
pub use reference::{ReferenceRange, ReferenceTable};

// Evaluation entry points
pub use algorithm::{
    InsightReport, PatternFindings, PatternRules, build_report, build_report_with_issues, classify,
    evaluate, interpret_named_values,
};

// Ingestion boundary
pub use ingest::{IngestOptions, parse_features_json};
