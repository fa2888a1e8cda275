//! Directive scanner using winnow.
//!
//! Finds syntactically complete, non-nested directive occurrences in
//! marker-normalized text. Branch groups must be brace-free, so an
//! occurrence whose branches still contain unresolved inner directives
//! does not match; the inner occurrences match instead, and the outer
//! one completes on a later pass. This is what makes repeated passes
//! resolve nesting innermost-first.

use winnow::combinator::{alt, delimited, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{Directive, Opcode};

/// Internal marker character that introduces directive codes.
///
/// Input text uses a host-visible marker (`\` by default); the engine
/// normalizes it to this control character before scanning, exactly as
/// the message pipelines this engine descends from do. U+001B is
/// therefore reserved and must not appear in raw input.
pub const MARKER: char = '\u{1b}';

/// One span of a scanned pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text copied through unchanged.
    Literal(&'a str),
    /// A complete directive occurrence at `start..end` (byte offsets).
    Directive {
        start: usize,
        end: usize,
        directive: Directive,
    },
}

/// Scan marker-normalized text for one pass worth of directives.
///
/// Returns pieces covering the entire input in order. Markers that do
/// not introduce a complete directive (host codes, incomplete
/// occurrences) are left inside literal pieces.
pub fn scan(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut lit_start = 0;
    let mut pos = 0;

    while let Some(off) = text[pos..].find(MARKER) {
        let start = pos + off;
        let mut input = &text[start..];
        match directive(&mut input) {
            Ok(directive) => {
                let end = text.len() - input.len();
                if lit_start < start {
                    pieces.push(Piece::Literal(&text[lit_start..start]));
                }
                pieces.push(Piece::Directive {
                    start,
                    end,
                    directive,
                });
                pos = end;
                lit_start = end;
            }
            // Not a complete directive here; step past the marker so
            // occurrences inside this one's branches are still found.
            Err(_) => pos = start + MARKER.len_utf8(),
        }
    }

    if lit_start < text.len() {
        pieces.push(Piece::Literal(&text[lit_start..]));
    }
    pieces
}

/// Parse one complete directive: marker, opcode, `[condition]`,
/// `{ifText}`, and an optional `{elseText}`.
fn directive(input: &mut &str) -> ModalResult<Directive> {
    let _ = MARKER.parse_next(input)?;
    let opcode = opcode(input)?;
    let condition =
        delimited('[', take_while(1.., |c: char| c != ']'), ']').parse_next(input)?;
    let if_text = brace_group(input)?;
    let else_text = opt(brace_group).parse_next(input)?;

    // A following '{' that did not form a complete brace-free group
    // means an inner directive is still unresolved; refuse to match so
    // a later pass sees the completed occurrence.
    if else_text.is_none() && input.starts_with('{') {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    Ok(Directive {
        opcode,
        condition: condition.to_string(),
        if_text,
        else_text,
    })
}

/// Parse a brace-free branch group: `{text}`.
fn brace_group(input: &mut &str) -> ModalResult<String> {
    delimited('{', take_while(0.., |c: char| c != '{' && c != '}'), '}')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse a directive opcode (case-insensitive).
fn opcode(input: &mut &str) -> ModalResult<Opcode> {
    use winnow::ascii::Caseless;

    alt((
        Caseless("OFF").value(Opcode::Off),
        Caseless("ON").value(Opcode::On),
        Caseless("OV").value(Opcode::VarCompare),
        Caseless("OPS").value(Opcode::PartySize),
        Caseless("OPC").value(Opcode::CorePartySize),
        Caseless("OPL").value(Opcode::Leader),
        Caseless("OPM").value(Opcode::AnyMember),
    ))
    .parse_next(input)
}
