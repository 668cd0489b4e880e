use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization as _};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded regex should be valid"));

/// Letters that carry no canonical decomposition, so NFD alone leaves them
/// untouched. Applied after lower-casing.
const FOLD_TABLE: &[(char, &str)] = &[
    ('ð', "d"),
    ('đ', "d"),
    ('þ', "th"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('ø', "o"),
    ('ß', "ss"),
    ('ł', "l"),
];

/// Canonical lookup key for a description label: trimmed, lower-cased,
/// accent-folded, with internal whitespace runs collapsed to one space.
///
/// The result is only ever used as a dictionary key.
pub(crate) fn normalize_label(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let folded: String = lowered
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .fold(String::with_capacity(lowered.len()), |mut acc, c| {
            match FOLD_TABLE.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => acc.push_str(to),
                None => acc.push(c),
            }
            acc
        });
    WHITESPACE_RUN.replace_all(&folded, " ").into_owned()
}
