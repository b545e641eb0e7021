//! Relevance ranking across fields and match tiers.

use crate::common::{make_item, make_item_full, sample_items};
use scour::{build_index, search, ItemKind, MatchField, SearchFilters};

#[test]
fn title_hit_outranks_tag_hit() {
    let index = build_index(vec![
        make_item_full(
            "tagged",
            ItemKind::Post,
            "Container Patterns",
            "",
            None,
            &["docker"],
            None,
        ),
        make_item_full(
            "titled",
            ItemKind::Post,
            "Docker Patterns",
            "",
            None,
            &["containers"],
            None,
        ),
    ]);

    let results = search(&index, "docker", &SearchFilters::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item.id, "titled");
    assert_eq!(results[1].item.id, "tagged");
    assert!(results[0].score.unwrap() < results[1].score.unwrap());
}

#[test]
fn exact_hit_outranks_typo_hit() {
    let index = build_index(vec![
        make_item("typo", ItemKind::Post, "Ansibel Tips", ""),
        make_item("exact", ItemKind::Post, "Ansible Tips", ""),
    ]);

    let results = search(&index, "ansible", &SearchFilters::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item.id, "exact");
}

#[test]
fn word_boundary_hit_outranks_infix_hit() {
    let index = build_index(vec![
        make_item("infix", ItemKind::Post, "Hyperlinking", ""),
        make_item("boundary", ItemKind::Post, "Link Checkers", ""),
    ]);

    let results = search(&index, "link", &SearchFilters::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item.id, "boundary");
}

#[test]
fn category_match_counts_toward_score() {
    let index = build_index(vec![make_item_full(
        "1",
        ItemKind::Guide,
        "Cluster Networking",
        "",
        Some("orchestration"),
        &[],
        None,
    )]);

    let results = search(&index, "orchestration", &SearchFilters::default());
    assert_eq!(results.len(), 1);
    // Category matches carry no highlightable span requirement, but they
    // must surface in the match metadata.
    assert!(results[0]
        .matches
        .iter()
        .any(|m| m.field == MatchField::Category));
}

#[test]
fn ranking_is_deterministic_across_runs() {
    let index = build_index(sample_items());
    let first = search(&index, "containers", &SearchFilters::default());
    for _ in 0..3 {
        let again = search(&index, "containers", &SearchFilters::default());
        assert_eq!(
            first.iter().map(|r| &r.item.id).collect::<Vec<_>>(),
            again.iter().map(|r| &r.item.id).collect::<Vec<_>>()
        );
    }
}
