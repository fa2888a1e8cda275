//! Post-expansion grammar transforms.
//!
//! Applied after directive expansion, in a fixed order: numerals to
//! words, ordinals, case folds, indefinite articles. Transforms operate
//! on marker-normalized text (see [`crate::parser::MARKER`]) and leave
//! codes they do not own untouched.

mod article;
mod case;
mod numbers;

pub use article::starts_with_vowel_sound;
pub use numbers::{number_word, ordinal_suffix, spelled_ordinal};

use crate::parser::MARKER;

/// Run the full post-processor over marker-normalized text.
///
/// Applying this to already-processed text is a no-op, since no grammar
/// code survives a pass.
pub fn apply(text: &str) -> String {
    let text = numbers::apply_number_words(text);
    let text = numbers::apply_ordinals(&text);
    let text = case::apply(&text);
    article::apply(&text)
}

/// Replace every `<marker>CODE[payload]` occurrence using `render`.
///
/// The code match is ASCII case-insensitive and must be followed
/// directly by `[`; anything else is left for other passes or the host.
fn replace_code(text: &str, code: &str, render: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + MARKER.len_utf8()..];
        if let Some(payload_at) = code_payload_start(after, code)
            && let Some(close) = after[payload_at..].find(']')
        {
            out.push_str(&render(&after[payload_at..payload_at + close]));
            rest = &after[payload_at + close + 1..];
        } else {
            out.push(MARKER);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset of the payload when `s` starts with `CODE[`.
fn code_payload_start(s: &str, code: &str) -> Option<usize> {
    let head = s.get(..code.len())?;
    if !head.eq_ignore_ascii_case(code) || !s[code.len()..].starts_with('[') {
        return None;
    }
    Some(code.len() + 1)
}
