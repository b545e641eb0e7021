// SPDX-License-Identifier: Apache-2.0

//! Query execution: fuzzy match, post-filter, sort.
//!
//! Search is query-driven, not a browse operation: an empty or
//! whitespace-only query returns nothing. A multi-term query is conjunctive
//! within a field - every term must hit that field for the field to count -
//! and an item matches when at least one field matches.
//!
//! Filters are applied after the fuzzy match. Each filter set is OR within
//! itself and the sets combine with AND. Relevance order is the engine's
//! native ranking and is never re-sorted; the other sort keys replace it.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};

use crate::fuzzy::{match_term, TermHit};
use crate::index::{FieldText, Index};
use crate::scoring::{combine_field_scores, field_weight};
use crate::types::{
    FieldMatch, MatchField, SearchFilters, SearchItem, SearchResult, SortDirection, SortKey,
};
use crate::utils::parse_query;

/// Execute a fuzzy query over the index, returning filtered, sorted results.
///
/// Never signals an error: empty queries yield `[]` and malformed dates
/// degrade to epoch zero during date-sort.
pub fn search(index: &Index, query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
    let terms: Vec<Vec<char>> = parse_query(query)
        .iter()
        .map(|t| t.chars().collect())
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = index
        .items()
        .iter()
        .zip(index.fields())
        .filter_map(|(item, fields)| {
            let mut scored: Vec<(f64, f64)> = Vec::new();
            let mut matches: Vec<FieldMatch> = Vec::new();

            let mut consider = |field: MatchField, text: &FieldText| {
                if let Some((score, spans)) = match_field(text, &terms) {
                    scored.push((score, field_weight(field)));
                    if !spans.is_empty() {
                        matches.push(FieldMatch {
                            field,
                            value: text.raw.clone(),
                            spans,
                        });
                    }
                }
            };

            consider(MatchField::Title, &fields.title);
            consider(MatchField::Description, &fields.description);
            if let Some(category) = &fields.category {
                consider(MatchField::Category, category);
            }
            // Tags are scored per tag; the best-matching tag represents the field.
            if let Some((score, tag, spans)) = best_tag(&fields.tags, &terms) {
                scored.push((score, field_weight(MatchField::Tags)));
                if !spans.is_empty() {
                    matches.push(FieldMatch {
                        field: MatchField::Tags,
                        value: tag.raw.clone(),
                        spans,
                    });
                }
            }

            if scored.is_empty() {
                return None;
            }
            Some(SearchResult {
                item: item.clone(),
                score: Some(combine_field_scores(&scored)),
                matches,
            })
        })
        .collect();

    // Native ranked order: best score first. Stable, so insertion order
    // breaks ties deterministically.
    results.sort_by(|a, b| {
        a.score
            .unwrap_or(1.0)
            .total_cmp(&b.score.unwrap_or(1.0))
    });

    apply_filters(&mut results, filters);
    apply_sort(&mut results, filters);
    results
}

/// Match every query term against one field. All terms must hit.
///
/// The field score is the mean of the term scores; spans are the union of the
/// admissible term spans, coalesced so no character is covered twice.
fn match_field(field: &FieldText, terms: &[Vec<char>]) -> Option<(f64, Vec<(usize, usize)>)> {
    let mut total = 0.0;
    let mut spans = Vec::new();
    for term in terms {
        let TermHit { score, span } = match_term(&field.folded, &field.words, term)?;
        total += score;
        if let Some(span) = span {
            spans.push(span);
        }
    }
    spans.sort_unstable();
    coalesce_spans(&mut spans);
    Some((total / terms.len() as f64, spans))
}

/// Merge sorted inclusive spans that overlap or touch.
///
/// Terms of one query can land on overlapping text ("docker" and "dock" both
/// start the same word); the highlighter requires disjoint spans per field, so
/// the merge happens here, where the spans are produced.
fn coalesce_spans(spans: &mut Vec<(usize, usize)>) {
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for &(start, end) in spans.iter() {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    *spans = merged;
}

/// Evaluate each tag as its own text and keep the best-scoring one.
fn best_tag<'a>(
    tags: &'a [FieldText],
    terms: &[Vec<char>],
) -> Option<(f64, &'a FieldText, Vec<(usize, usize)>)> {
    tags.iter()
        .filter_map(|tag| match_field(tag, terms).map(|(score, spans)| (score, tag, spans)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
}

/// Conjunctive post-filters: kinds, categories, tags.
fn apply_filters(results: &mut Vec<SearchResult>, filters: &SearchFilters) {
    if !filters.kinds.is_empty() {
        results.retain(|r| filters.kinds.contains(&r.item.kind));
    }
    if !filters.categories.is_empty() {
        results.retain(|r| {
            r.item
                .category
                .as_ref()
                .is_some_and(|c| filters.categories.contains(c))
        });
    }
    if !filters.tags.is_empty() {
        results.retain(|r| r.item.tags.iter().any(|t| filters.tags.contains(t)));
    }
}

/// Re-sort by the requested key. Relevance keeps the native ranked order
/// untouched, including its direction.
fn apply_sort(results: &mut [SearchResult], filters: &SearchFilters) {
    let compare: fn(&SearchResult, &SearchResult) -> Ordering = match filters.sort_by {
        SortKey::Relevance => return,
        SortKey::Title => |a, b| a.item.title.cmp(&b.item.title),
        SortKey::Kind => |a, b| a.item.kind.as_str().cmp(b.item.kind.as_str()),
        SortKey::Date => |a, b| date_sort_key(&a.item).cmp(&date_sort_key(&b.item)),
    };
    results.sort_by(|a, b| match filters.sort_direction {
        SortDirection::Asc => compare(a, b),
        SortDirection::Desc => compare(a, b).reverse(),
    });
}

/// Sort key for date ordering: seconds since the epoch.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Anything missing
/// or unparseable degrades to zero, which sorts first in ascending order.
fn date_sort_key(item: &SearchItem) -> i64 {
    let Some(raw) = item.date.as_deref() else {
        return 0;
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}
