// SPDX-License-Identifier: Apache-2.0

//! Static taxonomy data: display labels, style tokens, and popular searches.
//!
//! This is process-wide immutable configuration, not logic. The string-keyed
//! lookups return `None` for kinds outside the closed enum - a known soft
//! edge left to the presentation layer's rendering fallback rather than
//! hardened here.

use crate::types::ItemKind;

/// Human-readable label per kind, keyed by the wire string.
pub const TYPE_LABELS: &[(&str, &str)] = &[
    ("post", "Article"),
    ("guide", "Guide"),
    ("exercise", "Exercise"),
    ("quiz", "Quiz"),
    ("game", "Game"),
    ("news", "News"),
    ("page", "Page"),
    ("checklist", "Checklist"),
];

/// Style token per kind, keyed by the wire string.
pub const TYPE_COLORS: &[(&str, &str)] = &[
    ("post", "blue"),
    ("guide", "green"),
    ("exercise", "orange"),
    ("quiz", "purple"),
    ("game", "pink"),
    ("news", "red"),
    ("page", "gray"),
    ("checklist", "teal"),
];

/// Seed terms for the empty-state search UI.
pub const POPULAR_SEARCHES: &[&str] = &[
    "docker",
    "kubernetes",
    "ci/cd",
    "terraform",
    "ansible",
    "linux",
    "git",
    "monitoring",
];

/// Label for a raw kind string; `None` for unknown kinds.
pub fn kind_label(kind: &str) -> Option<&'static str> {
    TYPE_LABELS.iter().find(|(k, _)| *k == kind).map(|(_, v)| *v)
}

/// Style token for a raw kind string; `None` for unknown kinds.
pub fn kind_color(kind: &str) -> Option<&'static str> {
    TYPE_COLORS.iter().find(|(k, _)| *k == kind).map(|(_, v)| *v)
}

impl ItemKind {
    /// Human-readable label. Total over the enum, unlike [`kind_label`].
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Post => "Article",
            ItemKind::Guide => "Guide",
            ItemKind::Exercise => "Exercise",
            ItemKind::Quiz => "Quiz",
            ItemKind::Game => "Game",
            ItemKind::News => "News",
            ItemKind::Page => "Page",
            ItemKind::Checklist => "Checklist",
        }
    }

    /// Style token. Total over the enum, unlike [`kind_color`].
    pub fn color(self) -> &'static str {
        match self {
            ItemKind::Post => "blue",
            ItemKind::Guide => "green",
            ItemKind::Exercise => "orange",
            ItemKind::Quiz => "purple",
            ItemKind::Game => "pink",
            ItemKind::News => "red",
            ItemKind::Page => "gray",
            ItemKind::Checklist => "teal",
        }
    }
}
