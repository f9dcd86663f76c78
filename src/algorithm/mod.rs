//! Rule-evaluation algorithms
//!
//! The range classifier and the pattern evaluator, plus the assembly
//! step that combines their findings into one ordered report.

pub mod patterns;
pub mod range;
pub mod report;

pub use patterns::{PatternFindings, PatternRules, evaluate};
pub use range::classify;
pub use report::{InsightReport, build_report, build_report_with_issues, interpret_named_values};
