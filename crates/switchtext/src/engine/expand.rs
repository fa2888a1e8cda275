//! Fixed-point directive expansion.
//!
//! Each pass scans the text for complete directive occurrences, parses
//! them into AST nodes, evaluates their conditions, and splices the
//! selected branch. Nested directives keep the enclosing occurrence
//! from matching until an earlier pass has resolved them, so repeated
//! passes bubble outward until no directive pattern remains.

use bon::Builder;

use crate::grammar;
use crate::parser::{Condition, MARKER, Piece, scan};

use super::error::ExpandError;
use super::evaluate::evaluate;
use super::state::StateProvider;

/// Default ceiling on rewrite passes.
pub const DEFAULT_MAX_PASSES: usize = 100;

/// The expansion engine.
///
/// Holds host configuration only; game state is passed per call. The
/// engine is pure with respect to its input text and reads state
/// synchronously through the provider.
///
/// # Example
///
/// ```
/// use switchtext::{Engine, MemoryState};
///
/// let state = MemoryState {
///     switches: [(21, true)].into_iter().collect(),
///     ..MemoryState::default()
/// };
/// let engine = Engine::new();
/// let out = engine.expand(r"Good \ON[21]{evening}{day}.", &state).unwrap();
/// assert_eq!(out, "Good evening.");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Engine {
    /// Marker character that introduces directive codes.
    #[builder(default = '\\')]
    marker: char,
    /// Ceiling on rewrite passes before expansion is declared divergent.
    #[builder(default = DEFAULT_MAX_PASSES)]
    max_passes: usize,
    /// Whether to run the grammar post-processor after expansion.
    #[builder(default = true)]
    grammar: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::builder().build()
    }
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The marker character this engine scans for.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Expand every directive in `text` and apply the grammar
    /// post-processor, producing display-ready text.
    pub fn expand(&self, text: &str, state: &dyn StateProvider) -> Result<String, ExpandError> {
        let mut current = self.prepare(text);
        current = self.run_passes(current, state)?;
        if self.grammar {
            current = grammar::apply(&current);
        }
        Ok(self.finish(&current))
    }

    /// True when `text`, fully expanded, contains no non-whitespace
    /// characters. Used by choice lists to drop entries that are empty
    /// under the current state. Grammar codes and host codes count as
    /// content.
    pub fn is_empty_after_expansion(
        &self,
        text: &str,
        state: &dyn StateProvider,
    ) -> Result<bool, ExpandError> {
        let expanded = self.run_passes(self.prepare(text), state)?;
        Ok(expanded.trim().is_empty())
    }

    /// Normalize the host marker to the internal control character.
    ///
    /// A doubled marker denotes one literal marker character and never
    /// starts a directive.
    fn prepare(&self, text: &str) -> String {
        let marked: String = text
            .chars()
            .map(|c| if c == self.marker { MARKER } else { c })
            .collect();
        let doubled: String = [MARKER, MARKER].iter().collect();
        marked.replace(&doubled, &self.marker.to_string())
    }

    /// Run expansion passes to a fixed point, bounded by `max_passes`.
    fn run_passes(
        &self,
        mut text: String,
        state: &dyn StateProvider,
    ) -> Result<String, ExpandError> {
        for _ in 0..self.max_passes {
            let (next, changed) = self.pass(&text, state)?;
            if !changed {
                return Ok(next);
            }
            text = next;
        }
        Err(ExpandError::ExpansionDivergence {
            passes: self.max_passes,
            residual: self.finish(&text),
        })
    }

    /// One pass: replace every complete directive found in `text`.
    /// Replacement text is not rescanned within the same pass.
    fn pass(&self, text: &str, state: &dyn StateProvider) -> Result<(String, bool), ExpandError> {
        let pieces = scan(text);
        let mut changed = false;
        let mut out = String::with_capacity(text.len());

        for piece in pieces {
            match piece {
                Piece::Literal(literal) => out.push_str(literal),
                Piece::Directive { directive, .. } => {
                    changed = true;
                    let condition = Condition::parse(directive.opcode, &directive.condition)
                        .map_err(|e| ExpandError::MalformedCondition {
                            opcode: directive.opcode,
                            condition: directive.condition.clone(),
                            message: e.message,
                        })?;
                    let met = evaluate(&condition, state)?;
                    out.push_str(if met {
                        &directive.if_text
                    } else {
                        directive.else_text.as_deref().unwrap_or("")
                    });
                }
            }
        }
        Ok((out, changed))
    }

    /// Decode brace escapes and restore the host marker.
    ///
    /// `BO`/`BC` escapes decode only here, after every expansion pass,
    /// so literal braces never participate in delimiter matching. Any
    /// other remaining code is restored verbatim for downstream host
    /// processing.
    fn finish(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(pos) = rest.find(MARKER) {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + MARKER.len_utf8()..];
            let mut chars = after.chars();
            match (chars.next(), chars.next()) {
                (Some(b), Some(o))
                    if b.eq_ignore_ascii_case(&'b') && o.eq_ignore_ascii_case(&'o') =>
                {
                    out.push('{');
                    rest = &after[2..];
                }
                (Some(b), Some(c))
                    if b.eq_ignore_ascii_case(&'b') && c.eq_ignore_ascii_case(&'c') =>
                {
                    out.push('}');
                    rest = &after[2..];
                }
                _ => {
                    out.push(self.marker);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}
