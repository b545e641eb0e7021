// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search core.
//!
//! These types define how indexable items, query filters, and results fit
//! together. Everything here is plain data: the index holds items immutably
//! once built, filters are ephemeral per-query state, and results are computed
//! fresh for every query and discarded after rendering.
//!
//! # Invariants
//!
//! - **SearchItem**: `id` is unique within one index snapshot. Missing
//!   `category`/`tags`/`date` never break filtering or sorting - they are
//!   treated as empty/zero by every consumer.
//! - **SearchFilters**: an empty set means "allow all", not "allow none".
//! - **FieldMatch**: `spans` are inclusive `[start, end]` character ranges into
//!   the recorded `value`, never byte offsets.

use serde::{Deserialize, Serialize};

// =============================================================================
// ITEM TYPES
// =============================================================================

/// The kind of content an item represents.
///
/// A closed enum: the taxonomy tables in `taxonomy` cover exactly these eight
/// variants, and the filter UI is populated from them via facet extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Post,
    Guide,
    Exercise,
    Quiz,
    Game,
    News,
    Page,
    Checklist,
}

impl ItemKind {
    /// All kinds, in display order.
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Post,
        ItemKind::Guide,
        ItemKind::Exercise,
        ItemKind::Quiz,
        ItemKind::Game,
        ItemKind::News,
        ItemKind::Page,
        ItemKind::Checklist,
    ];

    /// Lowercase string representation, matching the serde convention.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Post => "post",
            ItemKind::Guide => "guide",
            ItemKind::Exercise => "exercise",
            ItemKind::Quiz => "quiz",
            ItemKind::Game => "game",
            ItemKind::News => "news",
            ItemKind::Page => "page",
            ItemKind::Checklist => "checklist",
        }
    }

    /// Parse a raw kind string. Unknown strings yield `None` - the soft edge
    /// the presentation layer is expected to handle with its own fallback.
    pub fn parse(raw: &str) -> Option<ItemKind> {
        ItemKind::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

/// One indexable unit of content.
///
/// Supplied by the content pipeline (post/guide/quiz/game metadata providers)
/// as an already-materialized collection - the core performs no fetching or
/// persistence. The serde layout matches the pipeline's JSON export: camelCase
/// keys and `"type"` for the kind discriminant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    /// Unique stable identifier within an index snapshot.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Primary display and match field (highest match weight).
    pub title: String,
    /// Secondary match field.
    #[serde(default)]
    pub description: String,
    /// Navigation target; opaque to the index.
    pub url: String,
    /// Optional single classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// ISO-ish date string, used only for date-sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

// =============================================================================
// QUERY SHAPING
// =============================================================================

/// Which key orders the result list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// The fuzzy engine's native ranked order (best match first).
    /// This is the default and is never re-sorted afterward.
    #[default]
    Relevance,
    Title,
    Kind,
    Date,
}

/// Direction applied to the sort comparator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Ephemeral query-shaping state. Not persisted.
///
/// Each restriction set uses OR within itself; the sets combine with AND.
/// An empty set places no restriction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Allowed kinds; empty = all kinds.
    #[serde(default)]
    pub kinds: Vec<ItemKind>,
    /// Allowed categories; empty = all categories.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Required tags (at least one must be present); empty = no requirement.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_direction: SortDirection,
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Which item field a match landed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Description,
    Category,
    Tags,
}

impl MatchField {
    /// Lowercase string representation, matching the serde convention.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchField::Title => "title",
            MatchField::Description => "description",
            MatchField::Category => "category",
            MatchField::Tags => "tags",
        }
    }
}

/// Match-location metadata for one field of one result.
///
/// `value` is the original (unfolded) field text the spans were computed
/// against. The highlighter compares it to the text it is given, which guards
/// against applying one field's indices to another field's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: MatchField,
    pub value: String,
    /// Inclusive `[start, end]` character ranges within `value`.
    pub spans: Vec<(usize, usize)>,
}

/// A `SearchItem` augmented with relevance metadata.
///
/// `score` is on the engine's own scale: lower is better, 0.0 is a perfect
/// match. `None` only occurs for results constructed outside the query path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub item: SearchItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<FieldMatch>,
}
