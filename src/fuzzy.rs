// SPDX-License-Identifier: Apache-2.0

//! Term-level fuzzy matching.
//!
//! One query term against one field text, in three tiers:
//!
//! 1. Substring hit at a word boundary → [`EXACT_MATCH_SCORE`]
//! 2. Substring hit inside a word → [`INFIX_MATCH_SCORE`]
//! 3. Bounded Levenshtein against each word → [`fuzzy_score`] of the distance
//!
//! Each tier short-circuits the next. The edit distance uses two early exits:
//! the length difference is a lower bound on the distance, and a row whose
//! minimum already exceeds the bound can never recover.
//!
//! All positions are character indices into the folded field text, which has
//! exactly one character per character of the original text (see
//! `utils::fold_case`), so spans can be applied to the original for
//! highlighting.

use crate::scoring::{
    fuzzy_score, EXACT_MATCH_SCORE, INFIX_MATCH_SCORE, MAX_EDIT_DISTANCE, MIN_MATCH_LEN,
    SCORE_THRESHOLD,
};

/// A word within a folded field text: `folded[start..start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Word {
    pub start: usize,
    pub len: usize,
}

/// How one query term matched a field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TermHit {
    /// Lower is better; always `<= SCORE_THRESHOLD`.
    pub score: f64,
    /// Inclusive character span of the matched text, or `None` when the span
    /// would be shorter than [`MIN_MATCH_LEN`] (suppressed as noise).
    pub span: Option<(usize, usize)>,
}

/// Split a folded text into whitespace-delimited words.
pub(crate) fn split_words(folded: &[char]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in folded.iter().enumerate() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(Word { start: s, len: i - s });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push(Word {
            start: s,
            len: folded.len() - s,
        });
    }
    words
}

/// Match one query term against a folded field text.
///
/// Returns `None` when the term misses the field entirely (best fuzzy
/// candidate beyond [`MAX_EDIT_DISTANCE`] edits or above the score threshold).
pub(crate) fn match_term(folded: &[char], words: &[Word], term: &[char]) -> Option<TermHit> {
    if term.is_empty() || folded.is_empty() {
        return None;
    }

    // Tiers 1 and 2: substring occurrence, preferring word boundaries.
    if let Some((pos, at_boundary)) = find_occurrence(folded, term) {
        let score = if at_boundary {
            EXACT_MATCH_SCORE
        } else {
            INFIX_MATCH_SCORE
        };
        let span = (term.len() >= MIN_MATCH_LEN).then(|| (pos, pos + term.len() - 1));
        return Some(TermHit { score, span });
    }

    // Tier 3: bounded edit distance against each word. Short terms would match
    // half the dictionary at distance 2, so they only get one edit.
    if term.len() < MIN_MATCH_LEN {
        return None;
    }
    let max_edits = if term.len() >= 5 { MAX_EDIT_DISTANCE } else { 1 };

    let mut best: Option<(usize, Word)> = None;
    for word in words {
        let word_chars = &folded[word.start..word.start + word.len];
        if let Some(distance) = levenshtein_within(word_chars, term, max_edits) {
            if distance > 0 && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, *word));
            }
        }
    }

    let (distance, word) = best?;
    let score = fuzzy_score(distance);
    if score > SCORE_THRESHOLD {
        return None;
    }
    let span = (word.len >= MIN_MATCH_LEN).then(|| (word.start, word.start + word.len - 1));
    Some(TermHit { score, span })
}

/// Find the first occurrence of `needle` in `haystack`, preferring occurrences
/// that start at a word boundary.
///
/// Returns `(position, starts_at_word_boundary)`.
fn find_occurrence(haystack: &[char], needle: &[char]) -> Option<(usize, bool)> {
    if needle.len() > haystack.len() {
        return None;
    }
    let mut infix: Option<usize> = None;
    for start in 0..=(haystack.len() - needle.len()) {
        if haystack[start..start + needle.len()] != *needle {
            continue;
        }
        if start == 0 || haystack[start - 1].is_whitespace() {
            return Some((start, true));
        }
        if infix.is_none() {
            infix = Some(start);
        }
    }
    infix.map(|pos| (pos, false))
}

/// Edit distance between two character slices, bounded by `max`.
///
/// Returns `Some(distance)` when `distance <= max`, `None` otherwise.
/// Two early-exit paths:
/// 1. If the length difference exceeds `max`, no alignment can be close enough.
/// 2. If the minimum value of a DP row exceeds `max`, abandon the computation.
pub(crate) fn levenshtein_within(a: &[char], b: &[char], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    (dp[b.len()] <= max).then_some(dp[b.len()])
}
