//! Conjunctive post-filtering: kinds AND categories AND tags.

use crate::common::{kind_filters, sample_items};
use scour::{build_index, search, ItemKind, SearchFilters};

#[test]
fn empty_filter_sets_allow_everything() {
    let index = build_index(sample_items());
    let unfiltered = search(&index, "containers", &SearchFilters::default());
    assert!(!unfiltered.is_empty());
}

#[test]
fn kind_set_is_or_within_itself() {
    let index = build_index(sample_items());
    let filters = kind_filters(&[ItemKind::Post, ItemKind::Guide]);
    let results = search(&index, "containers", &filters);
    assert!(!results.is_empty());
    for result in &results {
        assert!(matches!(result.item.kind, ItemKind::Post | ItemKind::Guide));
    }
}

#[test]
fn filter_sets_combine_with_and() {
    let index = build_index(sample_items());
    // Kind matches but category doesn't: the AND drops it.
    let filters = SearchFilters {
        kinds: vec![ItemKind::Guide],
        categories: vec!["iac".to_string()],
        ..SearchFilters::default()
    };
    assert!(search(&index, "docker", &filters).is_empty());

    // Both restrictions satisfied by the same item.
    let filters = SearchFilters {
        kinds: vec![ItemKind::Guide],
        categories: vec!["containers".to_string()],
        ..SearchFilters::default()
    };
    let results = search(&index, "docker", &filters);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "docker-guide");
}

#[test]
fn tag_filter_needs_one_shared_tag() {
    let index = build_index(sample_items());
    let filters = SearchFilters {
        tags: vec!["k8s".to_string(), "terraform".to_string()],
        ..SearchFilters::default()
    };
    let results = search(&index, "containers", &filters);
    // docker-guide matches the query but carries neither tag.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "k8s-basics");
}

#[test]
fn category_filter_never_matches_uncategorized_items() {
    let index = build_index(sample_items());
    let filters = SearchFilters {
        categories: vec!["anything".to_string()],
        ..SearchFilters::default()
    };
    // "pipeline" matches only the uncategorized game.
    assert!(search(&index, "pipeline", &filters).is_empty());
}

#[test]
fn filters_do_not_resurrect_non_matching_items() {
    let index = build_index(sample_items());
    let filters = kind_filters(&[ItemKind::Page]);
    // The page doesn't contain "terraform"; filtering must not add it.
    assert!(search(&index, "terraform", &filters).is_empty());
}
