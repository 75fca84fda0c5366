//! Error types for rule construction.

use std::fmt;

/// Errors arising from rulestring parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A rulestring could not be parsed into a [`RuleSet`](crate::RuleSet).
    MalformedRuleString {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRuleString { detail } => {
                write!(f, "malformed rulestring: {detail}")
            }
        }
    }
}

impl std::error::Error for RuleError {}
