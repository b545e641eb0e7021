//! Shared test utilities and fixtures.

#![allow(dead_code)]

use scour::{ItemKind, SearchFilters, SearchItem, SortDirection, SortKey};

// Re-export canonical fixtures from scour::testing
pub use scour::testing::{make_item, make_item_full, sample_items};

/// Filters restricted to the given kinds.
pub fn kind_filters(kinds: &[ItemKind]) -> SearchFilters {
    SearchFilters {
        kinds: kinds.to_vec(),
        ..SearchFilters::default()
    }
}

/// Filters with only the sort settings changed.
pub fn sort_filters(sort_by: SortKey, sort_direction: SortDirection) -> SearchFilters {
    SearchFilters {
        sort_by,
        sort_direction,
        ..SearchFilters::default()
    }
}

/// A corpus where every item contains the marker word "devops" somewhere,
/// so a single query matches everything and sorting behavior is observable.
pub fn sortable_items() -> Vec<SearchItem> {
    vec![
        make_item_full(
            "c",
            ItemKind::Quiz,
            "Zero Downtime Devops",
            "",
            None,
            &[],
            Some("2024-06-01"),
        ),
        make_item_full(
            "a",
            ItemKind::Post,
            "Alpha Devops",
            "",
            None,
            &[],
            Some("2022-01-01"),
        ),
        make_item_full(
            "b",
            ItemKind::Guide,
            "Mid Devops",
            "",
            None,
            &[],
            None, // sorts as epoch zero
        ),
    ]
}
