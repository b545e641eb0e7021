//! Sort keys and directions.

use crate::common::{sort_filters, sortable_items};
use scour::{build_index, search, SortDirection, SortKey};

fn ids(results: &[scour::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.item.id.as_str()).collect()
}

#[test]
fn relevance_is_the_native_order_and_ignores_direction() {
    let index = build_index(sortable_items());
    let asc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Relevance, SortDirection::Asc),
    );
    let desc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Relevance, SortDirection::Desc),
    );
    // Relevance order is never re-sorted, whatever the direction says.
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn title_sort_ascending_and_descending() {
    let index = build_index(sortable_items());
    let asc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Title, SortDirection::Asc),
    );
    assert_eq!(ids(&asc), vec!["a", "b", "c"]); // Alpha < Mid < Zero

    let desc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Title, SortDirection::Desc),
    );
    assert_eq!(ids(&desc), vec!["c", "b", "a"]);
}

#[test]
fn kind_sort_compares_kind_strings() {
    let index = build_index(sortable_items());
    let asc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Kind, SortDirection::Asc),
    );
    // guide < post < quiz lexicographically.
    assert_eq!(ids(&asc), vec!["b", "a", "c"]);
}

#[test]
fn date_sort_puts_missing_dates_first_ascending() {
    let index = build_index(sortable_items());
    let asc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Date, SortDirection::Asc),
    );
    // "b" has no date and degrades to epoch zero.
    assert_eq!(ids(&asc), vec!["b", "a", "c"]);

    let desc = search(
        &index,
        "devops",
        &sort_filters(SortKey::Date, SortDirection::Desc),
    );
    assert_eq!(ids(&desc), vec!["c", "a", "b"]);
}
