//! Canonical fixtures for tests and benches.
//!
//! Kept in the library (not `tests/common`) so unit tests, integration tests,
//! and benches all build items the same way.

use crate::types::{ItemKind, SearchItem};

/// Build a minimal item with the given id, kind, title, and description.
pub fn make_item(id: &str, kind: ItemKind, title: &str, description: &str) -> SearchItem {
    SearchItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        url: format!("/{}/{}", kind.as_str(), id),
        category: None,
        tags: Vec::new(),
        date: None,
    }
}

/// Build a fully-populated item.
pub fn make_item_full(
    id: &str,
    kind: ItemKind,
    title: &str,
    description: &str,
    category: Option<&str>,
    tags: &[&str],
    date: Option<&str>,
) -> SearchItem {
    SearchItem {
        category: category.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: date.map(str::to_string),
        ..make_item(id, kind, title, description)
    }
}

/// A small DevOps-flavored corpus exercising every field and kind mix the
/// tests care about: categories, tags, dates, and items missing all three.
pub fn sample_items() -> Vec<SearchItem> {
    vec![
        make_item_full(
            "k8s-basics",
            ItemKind::Post,
            "Kubernetes Basics",
            "Pods, deployments, and services from scratch",
            Some("orchestration"),
            &["k8s", "containers"],
            Some("2024-03-01"),
        ),
        make_item_full(
            "docker-guide",
            ItemKind::Guide,
            "Docker from Zero",
            "Images, layers, and registries explained",
            Some("containers"),
            &["docker", "containers"],
            Some("2024-01-15"),
        ),
        make_item_full(
            "tf-quiz",
            ItemKind::Quiz,
            "Terraform Quiz",
            "Test your infrastructure-as-code knowledge",
            Some("iac"),
            &["terraform"],
            Some("2023-11-20T08:30:00Z"),
        ),
        make_item_full(
            "pipeline-game",
            ItemKind::Game,
            "Pipeline Runner",
            "Keep the CI pipeline green",
            None,
            &["ci"],
            None,
        ),
        make_item(
            "about",
            ItemKind::Page,
            "About this site",
            "Who writes here and why",
        ),
    ]
}
