//! Degenerate inputs the engine must absorb without erroring.

use crate::common::{make_item, make_item_full, sample_items};
use scour::{build_index, search, Index, ItemKind, SearchFilters};

#[test]
fn empty_index_matches_nothing() {
    let index = build_index(Vec::new());
    assert!(search(&index, "docker", &SearchFilters::default()).is_empty());
}

#[test]
fn whitespace_only_query_is_empty_query() {
    let index = build_index(sample_items());
    for query in ["", " ", "\t", "\n  \n"] {
        assert!(search(&index, query, &SearchFilters::default()).is_empty());
    }
}

#[test]
fn items_with_empty_optional_fields_are_searchable() {
    let index = build_index(vec![make_item("bare", ItemKind::Page, "Contact", "")]);
    let results = search(&index, "contact", &SearchFilters::default());
    assert_eq!(results.len(), 1);
}

#[test]
fn garbage_dates_never_panic_during_date_sort() {
    let index = build_index(vec![
        make_item_full("1", ItemKind::Post, "Devops A", "", None, &[], Some("not-a-date")),
        make_item_full("2", ItemKind::Post, "Devops B", "", None, &[], Some("2024-13-99")),
        make_item_full("3", ItemKind::Post, "Devops C", "", None, &[], Some("2024-02-01")),
    ]);
    let filters = SearchFilters {
        sort_by: scour::SortKey::Date,
        ..SearchFilters::default()
    };
    let results = search(&index, "devops", &filters);
    assert_eq!(results.len(), 3);
    // The one parseable date sorts last ascending; the garbage ties at zero.
    assert_eq!(results[2].item.id, "3");
}

#[test]
fn query_casing_is_irrelevant() {
    let index = build_index(sample_items());
    let lower = search(&index, "kubernetes", &SearchFilters::default());
    let upper = search(&index, "KUBERNETES", &SearchFilters::default());
    assert_eq!(lower.len(), upper.len());
}

#[test]
fn accented_queries_hit_accented_titles_at_the_exact_tier() {
    let index = build_index(vec![make_item(
        "1",
        ItemKind::Post,
        "Café Reliability Engineering",
        "",
    )]);
    // Query terms are diacritic-stripped and field text folds "é" to "e",
    // so both spellings land the same word-boundary hit.
    for query in ["café", "cafe"] {
        let results = search(&index, query, &SearchFilters::default());
        assert_eq!(results.len(), 1);
        assert!(results[0].score.unwrap() < 0.05);
    }
}

#[test]
fn unicode_queries_do_not_panic() {
    let index = build_index(vec![make_item(
        "1",
        ItemKind::Post,
        "Café Reliability Engineering",
        "",
    )]);
    let _ = search(&index, "日本語", &SearchFilters::default());
}

#[test]
fn from_json_integrates_with_search() {
    let json = r#"[
        {"id": "1", "type": "news", "title": "Release Roundup",
         "description": "", "url": "/news/1"}
    ]"#;
    let index = Index::from_json(json).unwrap();
    let results = search(&index, "release", &SearchFilters::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.kind, ItemKind::News);
}
