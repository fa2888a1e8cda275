//! Static checks for switchable message text.
//!
//! The lint pass runs without state access and is stricter than the
//! runtime scanner: occurrences the scanner would silently pass through
//! as literal text (missing brackets, unterminated groups) are reported
//! here, because at runtime they end up visible to the player.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

use crate::parser::{Condition, Opcode};

use super::expand::Engine;

/// A static issue found in message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    /// Byte range of the offending fragment in the original text.
    pub span: Range<usize>,
    pub kind: LintKind,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// What a lint warning is about.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LintKind {
    /// Condition text does not match its opcode's grammar.
    #[error("malformed {opcode} condition '{condition}': {message}")]
    MalformedCondition {
        opcode: Opcode,
        condition: String,
        message: String,
    },

    /// Directive-looking code with no `[condition]` clause.
    #[error("{opcode} directive is missing its '[condition]' clause")]
    MissingCondition { opcode: Opcode },

    /// Condition clause opened but never closed.
    #[error("{opcode} condition clause is never closed")]
    UnterminatedCondition { opcode: Opcode },

    /// Directive with a condition but no branch group.
    #[error("{opcode} directive has no '{{...}}' branch")]
    MissingBranch { opcode: Opcode },

    /// Branch group opened but never closed.
    #[error("{opcode} branch group is never closed")]
    UnterminatedBranch { opcode: Opcode },
}

impl Engine {
    /// Lint `text` using this engine's marker.
    pub fn lint(&self, text: &str) -> Vec<LintWarning> {
        lint(text, self.marker())
    }
}

/// Scan raw message text for directive mistakes.
///
/// Spans are byte offsets into `text` as given (before any marker
/// normalization). Unknown codes are not reported; hosts route their
/// own codes through the same marker.
pub fn lint(text: &str, marker: char) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut pos = 0;

    while let Some(off) = text[pos..].find(marker) {
        let start = pos + off;
        let after = start + marker.len_utf8();

        // Doubled marker is one literal marker character.
        if text[after..].starts_with(marker) {
            pos = after + marker.len_utf8();
            continue;
        }

        if let Some((opcode, code_len)) = match_opcode(&text[after..]) {
            lint_directive(text, start, after + code_len, opcode, &mut warnings);
        }
        pos = after;
    }
    warnings
}

/// Match a directive opcode at the start of `s`, rejecting codes that
/// continue with more word characters (those are host codes).
fn match_opcode(s: &str) -> Option<(Opcode, usize)> {
    Opcode::ALL.into_iter().find_map(|opcode| {
        let code = opcode.code();
        let head = s.get(..code.len())?;
        if !head.eq_ignore_ascii_case(code) {
            return None;
        }
        match s[code.len()..].chars().next() {
            Some(c) if c.is_ascii_alphanumeric() => None,
            _ => Some((opcode, code.len())),
        }
    })
}

/// Check one directive occurrence starting at `start`, with the
/// condition clause expected at `cond_at`.
fn lint_directive(
    text: &str,
    start: usize,
    cond_at: usize,
    opcode: Opcode,
    warnings: &mut Vec<LintWarning>,
) {
    if !text[cond_at..].starts_with('[') {
        warnings.push(LintWarning {
            span: start..cond_at,
            kind: LintKind::MissingCondition { opcode },
        });
        return;
    }

    let cond_start = cond_at + 1;
    let Some(close) = text[cond_start..].find(']') else {
        warnings.push(LintWarning {
            span: start..text.len(),
            kind: LintKind::UnterminatedCondition { opcode },
        });
        return;
    };
    let cond_end = cond_start + close;
    let condition = &text[cond_start..cond_end];

    if let Err(e) = Condition::parse(opcode, condition) {
        warnings.push(LintWarning {
            span: cond_start..cond_end,
            kind: LintKind::MalformedCondition {
                opcode,
                condition: condition.to_string(),
                message: e.message,
            },
        });
    }

    // Branch groups; nested directives make these balanced rather than
    // brace-free, so match depth instead of reusing the scanner.
    let mut at = cond_end + 1;
    if !text[at..].starts_with('{') {
        warnings.push(LintWarning {
            span: start..cond_end + 1,
            kind: LintKind::MissingBranch { opcode },
        });
        return;
    }
    for _ in 0..2 {
        if !text[at..].starts_with('{') {
            break;
        }
        match balanced_group_end(&text[at..]) {
            Some(len) => at += len,
            None => {
                warnings.push(LintWarning {
                    span: at..text.len(),
                    kind: LintKind::UnterminatedBranch { opcode },
                });
                return;
            }
        }
    }
}

/// Length of the balanced `{...}` group at the start of `s`, if closed.
fn balanced_group_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
