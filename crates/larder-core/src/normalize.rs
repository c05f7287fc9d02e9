//! Ingredient name normalization.
//!
//! Every input channel (typed text, photo recognition, speech extraction)
//! funnels its raw strings through [`normalize`] before they reach the
//! session's ingredient set. Invalid entries are dropped, never reported.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Words that are never ingredients on their own.
pub const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "some", "any", "with", "have", "got", "i", "we", "my", "our",
];

/// Minimum length, in characters, of a cleaned ingredient name.
pub const MIN_NAME_CHARS: usize = 2;

/// Share of letters (among non-space characters) that
/// [`is_valid_ingredient`] requires to be exceeded.
pub const MIN_LETTER_RATIO: f64 = 0.5;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex is valid"));

/// A cleaned, display-ready ingredient name such as `"Tomato"`.
///
/// Only [`normalize`] and [`normalize_one`] construct values, so every
/// `IngredientName` is at least two characters long, is not a stop word,
/// and starts with an upper-case letter where one applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IngredientName(String);

impl IngredientName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IngredientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for IngredientName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IngredientName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Clean a single raw entry, or `None` if it is not a usable name.
///
/// Steps: trim and lowercase, drop punctuation, collapse whitespace, reject
/// short entries and stop words, capitalize the first character.
pub fn normalize_one(raw: &str) -> Option<IngredientName> {
    let lowered = raw.trim().to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.chars().count() < MIN_NAME_CHARS {
        return None;
    }
    if STOP_WORDS.contains(&cleaned.as_str()) {
        return None;
    }
    Some(IngredientName(capitalize_first(&cleaned)))
}

/// Normalize a batch of raw entries, keeping input order.
///
/// Duplicates are kept; deduplication against the session happens in
/// [`IngredientSet::extend`](crate::pantry::IngredientSet::extend).
pub fn normalize<I, S>(raw: I) -> Vec<IngredientName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|entry| normalize_one(entry.as_ref()))
        .collect()
}

/// Soft plausibility check: mostly letters and at least two characters.
///
/// The ratio counts letters over all characters except ASCII spaces.
pub fn is_valid_ingredient(candidate: &str) -> bool {
    if candidate.trim().chars().count() < MIN_NAME_CHARS {
        return false;
    }

    let letters = candidate.chars().filter(|c| c.is_alphabetic()).count();
    let total = candidate.chars().filter(|&c| c != ' ').count();
    if total == 0 {
        return false;
    }

    letters as f64 / total as f64 > MIN_LETTER_RATIO
}

/// Split comma-separated typed input into trimmed, non-empty entries.
pub fn split_typed_input(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Title-case the first character, leaving the rest unchanged.
///
/// Multi-character upper-case mappings ("ß" to "SS") keep only their first
/// character upper-cased, so a second pass through lowercasing yields the
/// same name.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    if let Some(title) = titlecase_digraph(first) {
        out.push(title);
    } else {
        let mut upper = first.to_uppercase();
        if let Some(head) = upper.next() {
            out.push(head);
        }
        out.extend(upper.flat_map(char::to_lowercase));
    }
    out.extend(chars);
    out
}

/// Latin digraphs whose title case differs from their upper case.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}
