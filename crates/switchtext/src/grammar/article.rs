//! Indefinite-article selection and the vowel-sound classifier.
//!
//! The classifier decides whether a word or numeral, spoken aloud,
//! begins with a vowel sound. It is table-driven English phonetics with
//! the usual pile of interacting exceptions, applied in a fixed order.

use crate::parser::MARKER;

/// Letters whose spoken names begin with a vowel sound
/// ("ef", "aitch", "em", ...).
const VOWEL_NAME_LETTERS: [char; 12] =
    ['A', 'E', 'F', 'H', 'I', 'L', 'M', 'N', 'O', 'R', 'S', 'X'];

/// Leading-u prefixes pronounced "yoo", which take "a".
const YOO_PREFIXES: [&str; 10] = [
    "unary", "uni", "ura", "ure", "uri", "uro", "usa", "use", "usi", "usu",
];

/// Silent-h prefixes, which take "an".
const SILENT_H_PREFIXES: [&str; 4] = ["heir", "honest", "honor", "hour"];

/// Whether `word`, spoken aloud, begins with a vowel sound.
///
/// Numerals are judged by how the number is read: a leading `8` is
/// always a vowel sound (eight, eighty, ...), and a leading `11` or
/// `18` group is one only when it is actually pronounced
/// "eleven"/"eighteen", which correlates with the digit count being
/// 2 modulo 3 ("11" and "11000", but not "1100"). That correlation is a
/// known approximation for some multi-group numbers and is kept as-is.
pub fn starts_with_vowel_sound(word: &str) -> bool {
    let word = word.trim();
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        // No sound to judge.
        return false;
    };

    if first.is_ascii_digit() {
        return leading_number_is_vowel_sound(word);
    }

    // Single letters and all-caps initialisms are spoken letter by
    // letter; judge the first letter's name.
    let second = chars.next();
    if second.is_none() || second.is_some_and(char::is_uppercase) {
        return VOWEL_NAME_LETTERS.contains(&first.to_ascii_uppercase());
    }

    let lower = word.to_lowercase();
    match lower.chars().next() {
        Some('a' | 'e' | 'i') => true,
        Some('o') => !(lower == "one" || lower.starts_with("oui")),
        Some('u') => {
            // "yoo"-sound prefixes take "a", except the "unidentif-"
            // family which swings back to "an".
            lower.starts_with("unidentif")
                || !YOO_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
        }
        Some('y') => !matches!(
            lower.chars().nth(1),
            Some('a' | 'e' | 'i' | 'o' | 'u')
        ),
        Some('h') => SILENT_H_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix)),
        _ => false,
    }
}

fn leading_number_is_vowel_sound(word: &str) -> bool {
    let digits: Vec<char> = word.chars().take_while(char::is_ascii_digit).collect();
    match digits.as_slice() {
        ['8', ..] => true,
        ['1', '1' | '8', ..] => digits.len() % 3 == 2,
        _ => false,
    }
}

/// Replace `an`-placeholder codes with `a`/`an`, judged against the
/// next word. The placeholder's own case carries over: `an` gives
/// `a`/`an`, `An` gives `A`/`An`, `AN` gives `A`/`AN`.
pub(crate) fn apply(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + MARKER.len_utf8()..];
        let Some(tail) = match_placeholder(after, &mut out) else {
            out.push(MARKER);
            rest = after;
            continue;
        };
        rest = tail;
    }
    out.push_str(rest);
    out
}

/// Match an `an` placeholder at the start of `s`; on success the chosen
/// article is pushed onto `out` and the remaining text returned.
fn match_placeholder<'a>(s: &'a str, out: &mut String) -> Option<&'a str> {
    let mut chars = s.chars();
    let a = chars.next().filter(|c| c.eq_ignore_ascii_case(&'a'))?;
    let n = chars.next().filter(|c| c.eq_ignore_ascii_case(&'n'))?;
    // Longer codes sharing the prefix belong to someone else.
    if chars.next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let tail = &s[2..];
    let vowel = starts_with_vowel_sound(next_word(tail));
    out.push(a);
    if vowel {
        out.push(n);
    }
    Some(tail)
}

/// The word the article attaches to: the next whitespace-delimited
/// token, shorn of surrounding punctuation.
fn next_word(s: &str) -> &str {
    let token = s.split_whitespace().next().unwrap_or_default();
    token.trim_matches(|c: char| !c.is_ascii_alphanumeric())
}
