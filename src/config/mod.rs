//! Configuration for the insight engine.

use crate::algorithm::patterns::PatternRules;
use crate::reference::ReferenceTable;

/// Configuration bundle passed into report evaluation
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Reference ranges, advisory messages, and healthy defaults
    pub table: ReferenceTable,
    /// Thresholds for the disease and lifestyle rules
    pub rules: PatternRules,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            table: ReferenceTable::canonical(),
            rules: PatternRules::default(),
        }
    }
}
