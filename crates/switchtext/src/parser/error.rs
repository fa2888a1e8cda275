//! Parse error types for condition grammars.

use thiserror::Error;

/// Why a condition string failed to parse against its opcode's grammar.
///
/// Carries a human-readable description of the first mismatch; the
/// expansion engine wraps this together with the opcode and the raw
/// fragment when surfacing it to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ConditionError {
    pub message: String,
}

impl ConditionError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
