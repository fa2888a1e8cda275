//! Error taxonomy for expansion and evaluation.

use std::fmt;

use thiserror::Error;

use crate::parser::Opcode;

/// An error surfaced while expanding switchable text.
///
/// Every variant carries the offending fragment. The engine performs no
/// retries and swallows nothing; evaluation is deterministic given
/// state, so retrying without a state change cannot help.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Condition text does not match its opcode's grammar.
    #[error("malformed {opcode} condition '{condition}': {message}")]
    MalformedCondition {
        opcode: Opcode,
        condition: String,
        message: String,
    },

    /// Opcode outside the fixed directive set.
    #[error("unknown opcode '{code}'{}", suggestion_suffix(suggestions))]
    UnknownOpcode {
        code: String,
        suggestions: Vec<String>,
    },

    /// A named container or context could not be mapped to an id.
    #[error("cannot resolve {kind} name '{name}' in reference '{reference}'")]
    UnresolvedNamedReference {
        kind: NameKind,
        name: String,
        reference: String,
    },

    /// Cross-context addressing is not supported by this host.
    #[error("cross-context reference '{reference}' is not supported by this host")]
    UnsupportedCrossContextAccess { reference: String },

    /// The pass ceiling was exhausted before expansion reached a fixed
    /// point.
    #[error("expansion did not converge after {passes} passes; residual text: '{residual}'")]
    ExpansionDivergence { passes: usize, residual: String },
}

impl ExpandError {
    /// Build an unknown-opcode error with near-miss suggestions.
    pub fn unknown_opcode(code: &str) -> Self {
        let candidates: Vec<&str> = Opcode::ALL.iter().map(|op| op.code()).collect();
        ExpandError::UnknownOpcode {
            code: code.to_string(),
            suggestions: compute_suggestions(code, &candidates),
        }
    }
}

/// Which kind of scope name failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Container,
    Context,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Container => f.write_str("container"),
            NameKind::Context => f.write_str("context"),
        }
    }
}

/// Compute near-miss suggestions for an unrecognized code.
///
/// Candidates are ranked by Jaro-Winkler similarity; only close matches
/// (>= 0.7) are kept, at most three.
pub fn compute_suggestions(input: &str, candidates: &[&str]) -> Vec<String> {
    let upper = input.to_ascii_uppercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(&upper, candidate), *candidate))
        .filter(|(score, _)| *score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(" or "))
    }
}
