// SPDX-License-Identifier: Apache-2.0

//! "Did you mean" and autocomplete suggestions.
//!
//! Two separate paths with different cost profiles:
//!
//! - [`get_suggestions`] is the fast path while typing: plain substring
//!   containment over titles, tags, and categories. No fuzzy logic.
//! - [`get_did_you_mean`] runs after a search came back thin: it scores a
//!   vocabulary of candidate terms with [`calculate_similarity`] and proposes
//!   near-misses.
//!
//! The similarity heuristic is a layered fallback, not an edit-distance
//! metric. The branches short-circuit each other, so their order is load
//! bearing: a containment hit (0.8 flat) masks whatever the prefix or
//! character-overlap branches would have produced. Reorder them and the
//! ranking changes.

use std::collections::HashSet;

use crate::types::SearchItem;
use crate::utils::common_prefix_len_chars;

/// How many autocomplete suggestions to return.
const MAX_SUGGESTIONS: usize = 5;

/// How many "did you mean" candidates to return.
const MAX_DID_YOU_MEAN: usize = 3;

/// Minimum query length (in characters) before either path activates.
const MIN_QUERY_LEN: usize = 2;

/// Title words shorter than this don't enter the did-you-mean vocabulary.
const MIN_VOCAB_WORD_LEN: usize = 3;

/// Similarity below which a candidate is considered unrelated.
const DID_YOU_MEAN_FLOOR: f64 = 0.4;

/// String similarity in `[0, 1]`: 1 is identical, 0 is unrelated.
///
/// Layered heuristic, evaluated strictly in this order:
///
/// 1. Either string empty → 0
/// 2. Identical → 1
/// 3. One contains the other → 0.8 (flat, not proportional)
/// 4. Common leading prefix of ≥ 3 characters → `0.5 + (prefix / max_len) * 0.3`
/// 5. Otherwise, distinct-character-set overlap → `|A ∩ B| / max(|A|, |B|)`
///
/// Case-sensitive; callers lowercase both sides first.
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(b) || b.contains(a) {
        return 0.8;
    }

    let prefix = common_prefix_len_chars(a, b);
    if prefix >= 3 {
        let max_len = a.chars().count().max(b.chars().count());
        return 0.5 + (prefix as f64 / max_len as f64) * 0.3;
    }

    // Repeated characters count once: sets, not multisets.
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();
    let overlap = set_a.intersection(&set_b).count();
    overlap as f64 / set_a.len().max(set_b.len()) as f64
}

/// Substring-based autocomplete: titles, tags, and categories that literally
/// contain the lowercased query. Top 5, distinct, in item order.
///
/// Queries shorter than two characters return nothing.
pub fn get_suggestions(query: &str, items: &[SearchItem]) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    let mut push = |candidate: &str| {
        if suggestions.len() < MAX_SUGGESTIONS
            && candidate.to_lowercase().contains(&query)
            && !suggestions.iter().any(|s| s == candidate)
        {
            suggestions.push(candidate.to_string());
        }
    };

    for item in items {
        push(&item.title);
        for tag in &item.tags {
            push(tag);
        }
        if let Some(category) = &item.category {
            push(category);
        }
    }
    suggestions
}

/// "Did you mean": the top 3 vocabulary terms similar - but not identical -
/// to the query.
///
/// The vocabulary is every whitespace-split title word of ≥ 3 characters,
/// every tag, and every category, lowercased. Terms scoring in the open
/// interval (0.4, 1.0) survive: identical terms are excluded because direct
/// search already found them. Survivors are re-mapped to the first original
/// casing found in the items.
pub fn get_did_you_mean(query: &str, items: &[SearchItem]) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut scored: Vec<(String, f64)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for term in vocabulary(items) {
        if !seen.insert(term.clone()) {
            continue;
        }
        let similarity = calculate_similarity(&query, &term);
        if similarity > DID_YOU_MEAN_FLOOR && similarity < 1.0 {
            scored.push((term, similarity));
        }
    }

    // Descending similarity; the stable sort keeps vocabulary order on ties.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_DID_YOU_MEAN)
        .map(|(term, _)| original_casing(&term, items))
        .collect()
}

/// Candidate terms in item order: title words (≥ 3 chars), tags, categories.
fn vocabulary(items: &[SearchItem]) -> Vec<String> {
    let mut terms = Vec::new();
    for item in items {
        for word in item.title.split_whitespace() {
            if word.chars().count() >= MIN_VOCAB_WORD_LEN {
                terms.push(word.to_lowercase());
            }
        }
        for tag in &item.tags {
            terms.push(tag.to_lowercase());
        }
        if let Some(category) = &item.category {
            terms.push(category.to_lowercase());
        }
    }
    terms
}

/// Recover the original casing of a lowercased vocabulary term.
///
/// Scans the items in order and returns the first case-insensitive match
/// among title words, tags, and categories; falls back to the term itself.
/// O(terms × items), which is fine at content-site scale.
fn original_casing(term: &str, items: &[SearchItem]) -> String {
    for item in items {
        for word in item.title.split_whitespace() {
            if word.to_lowercase() == term {
                return word.to_string();
            }
        }
        for tag in &item.tags {
            if tag.to_lowercase() == term {
                return tag.clone();
            }
        }
        if let Some(category) = &item.category {
            if category.to_lowercase() == term {
                return category.clone();
            }
        }
    }
    term.to_string()
}
