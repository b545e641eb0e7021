// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Scores are on a "lower is better" scale: 0.0 is a perfect match and
//! anything above [`SCORE_THRESHOLD`] is not a match at all. Two layers feed
//! the final number:
//!
//! 1. **Term tier** - how a query term matched a field: a substring hit at a
//!    word boundary beats a mid-word (infix) hit beats a fuzzy hit, and fuzzy
//!    decays per edit.
//! 2. **Field weight** - where it matched: title counts roughly twice as much
//!    as description, with category and tags trailing.
//!
//! # Key Invariant: Tier Dominance
//!
//! The tier constants satisfy:
//!
//! ```text
//! EXACT < INFIX < FUZZY_BASE
//! FUZZY_BASE + MAX_EDIT_DISTANCE * FUZZY_EDIT_PENALTY <= SCORE_THRESHOLD
//! ```
//!
//! so a two-edit fuzzy match is still admitted, and a three-edit one never is.

use crate::types::MatchField;

// =============================================================================
// TERM TIER CONSTANTS
// =============================================================================

/// Score for a substring hit starting at a word boundary
/// ("kube" matching the start of "kubernetes").
pub const EXACT_MATCH_SCORE: f64 = 0.0;

/// Score for a substring hit inside a word ("bern" matching "kubernetes").
pub const INFIX_MATCH_SCORE: f64 = 0.1;

/// Base score for a fuzzy (edit distance >= 1) hit.
pub const FUZZY_MATCH_BASE: f64 = 0.2;

/// Additional penalty per edit.
pub const FUZZY_EDIT_PENALTY: f64 = 0.15;

/// Maximum edit distance tolerated for a fuzzy term hit.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Field scores above this are discarded: the item does not match in that field.
///
/// Permissive enough to admit a two-edit typo (0.2 + 2 * 0.15 = 0.5), tight
/// enough to reject anything further away.
pub const SCORE_THRESHOLD: f64 = 0.5;

/// Minimum match span length, in characters. Shorter spans are noise.
pub const MIN_MATCH_LEN: usize = 3;

/// Floor applied before taking logarithms in the field combiner.
pub const SCORE_FLOOR: f64 = 1e-3;

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

/// Relative match weight for the title field.
pub const TITLE_WEIGHT: f64 = 2.0;

/// Relative match weight for the description field (baseline).
pub const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Relative match weight for the category field.
pub const CATEGORY_WEIGHT: f64 = 0.8;

/// Relative match weight for tags.
pub const TAGS_WEIGHT: f64 = 0.6;

/// Sum of all field weights; the normalizer in [`combine_field_scores`].
pub const TOTAL_FIELD_WEIGHT: f64 =
    TITLE_WEIGHT + DESCRIPTION_WEIGHT + CATEGORY_WEIGHT + TAGS_WEIGHT;

/// Match weight by field: Title (2.0) > Description (1.0) > Category (0.8) > Tags (0.6).
pub fn field_weight(field: MatchField) -> f64 {
    match field {
        MatchField::Title => TITLE_WEIGHT,
        MatchField::Description => DESCRIPTION_WEIGHT,
        MatchField::Category => CATEGORY_WEIGHT,
        MatchField::Tags => TAGS_WEIGHT,
    }
}

/// Score a fuzzy term hit at the given edit distance.
pub fn fuzzy_score(distance: usize) -> f64 {
    FUZZY_MATCH_BASE + distance as f64 * FUZZY_EDIT_PENALTY
}

/// Combine per-field scores into one item score.
///
/// Weighted geometric product over the matched fields, normalized by the
/// weight of *all* fields:
///
/// ```text
/// score = exp( Σ wᵢ · ln(max(sᵢ, SCORE_FLOOR)) / TOTAL_FIELD_WEIGHT )
/// ```
///
/// Normalizing by the full weight sum (not just the matched fields') is what
/// makes weights bite: a lone title hit lands at `s^(2.0/4.4)` while the same
/// score in the description lands at `s^(1.0/4.4)`, a worse number. It also
/// rewards breadth, since every additional matched field multiplies in
/// another factor below 1.
///
/// The result lives in `(0, 1]`; returns 1.0 (worst) for an empty slice.
pub fn combine_field_scores(scored: &[(f64, f64)]) -> f64 {
    if scored.is_empty() {
        return 1.0;
    }
    let log_sum: f64 = scored
        .iter()
        .map(|(score, weight)| weight * score.max(SCORE_FLOOR).ln())
        .sum();
    (log_sum / TOTAL_FIELD_WEIGHT).exp()
}
