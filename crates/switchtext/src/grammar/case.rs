//! Case-folding transforms.
//!
//! `UP`/`LOW` with a brace-delimited span fold the whole span; without
//! one they fold exactly the next grapheme, so combining sequences stay
//! intact.

use unicode_segmentation::UnicodeSegmentation;

use crate::parser::MARKER;

#[derive(Clone, Copy)]
enum Fold {
    Upper,
    Lower,
}

impl Fold {
    fn apply(self, s: &str) -> String {
        match self {
            Fold::Upper => s.to_uppercase(),
            Fold::Lower => s.to_lowercase(),
        }
    }
}

pub(crate) fn apply(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + MARKER.len_utf8()..];
        let Some((fold, tail)) = match_fold_code(after) else {
            out.push(MARKER);
            rest = after;
            continue;
        };

        if let Some(span) = tail.strip_prefix('{') {
            match span.find('}') {
                Some(close) => {
                    out.push_str(&fold.apply(&span[..close]));
                    rest = &span[close + 1..];
                }
                // Unterminated span; leave the code for the host.
                None => {
                    out.push(MARKER);
                    rest = after;
                }
            }
        } else {
            // Fold exactly the next grapheme and keep scanning after it.
            let mut graphemes = tail.graphemes(true);
            match graphemes.next() {
                Some(first) => {
                    out.push_str(&fold.apply(first));
                    rest = graphemes.as_str();
                }
                None => rest = tail,
            }
        }
    }
    out.push_str(rest);
    out
}

/// Match `UP` or `LOW` at the start of `s`. The match is greedy: the
/// next character may itself be a letter, which is exactly what the
/// spanless form folds (`UPhello` folds the `h`).
fn match_fold_code(s: &str) -> Option<(Fold, &str)> {
    [("UP", Fold::Upper), ("LOW", Fold::Lower)]
        .into_iter()
        .find_map(|(code, fold)| {
            let head = s.get(..code.len())?;
            head.eq_ignore_ascii_case(code)
                .then(|| (fold, &s[code.len()..]))
        })
}
