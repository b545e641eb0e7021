//! String processing utilities shared by the index, matcher, and suggesters.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables fuzzy matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// Used for query parsing and suggestion vocabularies, where character offsets
/// don't need to survive. For field text that feeds the highlighter, use
/// `fold_case` instead - it preserves length.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Parse a query string into normalized, whitespace-separated terms.
///
/// # Example
///
/// ```
/// let terms = scour::parse_query("Hello World");
/// assert_eq!(terms, vec!["hello", "world"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Lowercase a single character without changing string length.
///
/// Precomposed accented characters fold to their base letter ('É' → 'e'), so
/// an accented field matches the diacritic-stripped query terms that
/// `normalize` produces at the exact tier rather than the fuzzy one.
/// `char::to_lowercase` can expand one character into several (e.g. 'İ').
/// Expanding characters are kept as-is so that a folded text has exactly one
/// character per character of the original - the matcher reports spans in
/// folded indices and the highlighter applies them to the original text.
pub(crate) fn fold_char(c: char) -> char {
    let c = strip_diacritic(c);
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Reduce a precomposed character to its base letter, length-preservingly.
///
/// Decomposed input (a base letter followed by a standalone combining mark)
/// keeps the mark as its own character; the query side drops marks entirely,
/// so an exact substring hit still lands on the base letters.
#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    let mut parts = c.nfd().filter(|d| !is_combining_mark(*d));
    match (parts.next(), parts.next()) {
        (Some(base), None) => base,
        _ => c,
    }
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Case-fold a string into a character vector, preserving length.
///
/// Invariant: `fold_case(s).len() == s.chars().count()`.
pub(crate) fn fold_case(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Calculate the common prefix length of two strings (in characters).
pub fn common_prefix_len_chars(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .count()
}
