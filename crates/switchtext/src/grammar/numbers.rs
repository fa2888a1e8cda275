//! Numeral-to-word and ordinal transforms.

use super::replace_code;

const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const SPELLED_ORDINALS: [&str; 10] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth",
];

/// The spelled-out word for 1–10; larger or non-positive values have no
/// word form and pass through as numerals.
pub fn number_word(n: i64) -> Option<&'static str> {
    (1..=10)
        .contains(&n)
        .then(|| NUMBER_WORDS[(n - 1) as usize])
}

/// The spelled-out ordinal for 1–10.
pub fn spelled_ordinal(n: i64) -> Option<&'static str> {
    (1..=10)
        .contains(&n)
        .then(|| SPELLED_ORDINALS[(n - 1) as usize])
}

/// Standard English ordinal suffix. Teens (11–13) always take `th`.
pub fn ordinal_suffix(n: i64) -> &'static str {
    let n = n.abs();
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Replace `NUM[n]` codes with number words.
pub(crate) fn apply_number_words(text: &str) -> String {
    replace_code(text, "NUM", |payload| {
        match payload.trim().parse::<i64>() {
            Ok(n) => number_word(n)
                .map_or_else(|| payload.trim().to_string(), str::to_string),
            Err(_) => payload.to_string(),
        }
    })
}

/// Replace `ORDW[n]` and `ORD[n]` codes with ordinals.
pub(crate) fn apply_ordinals(text: &str) -> String {
    let text = replace_code(text, "ORDW", |payload| {
        match payload.trim().parse::<i64>() {
            Ok(n) => spelled_ordinal(n)
                .map_or_else(|| format!("{n}{}", ordinal_suffix(n)), str::to_string),
            Err(_) => payload.to_string(),
        }
    });
    replace_code(&text, "ORD", |payload| match payload.trim().parse::<i64>() {
        Ok(n) => format!("{n}{}", ordinal_suffix(n)),
        Err(_) => payload.to_string(),
    })
}
