//! Weighted fuzzy search for content sites.
//!
//! This crate is the search core behind a content site's search UI: it builds
//! an in-memory index over posts, guides, quizzes, games, and pages, executes
//! typo-tolerant queries with field-weighted ranking, and backs the
//! surrounding UI with suggestions, match highlighting, and facet extraction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│  index.rs    │────▶│  search.rs  │
//! │ (SearchItem,│     │ (build_index,│     │ (search:    │
//! │  filters)   │     │  fold fields)│     │ match→filter│
//! └─────────────┘     └──────────────┘     │  →sort)     │
//!        │                   │             └─────────────┘
//!        ▼                   ▼                    │
//! ┌─────────────┐     ┌──────────────┐            ▼
//! │ suggest.rs  │     │  fuzzy.rs    │     ┌─────────────┐
//! │ (did-you-   │     │ (term tiers, │     │highlight.rs │
//! │  mean)      │     │ levenshtein) │     │ (<mark>)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! Everything is synchronous and pure: no I/O, no blocking, no shared mutable
//! state. The index is immutable once built and can be read concurrently
//! without locking; a content update is a new index swapped in by reference.
//!
//! # Usage
//!
//! ```
//! use scour::{build_index, search, SearchFilters, SearchItem, ItemKind};
//!
//! let items = vec![SearchItem {
//!     id: "k8s-basics".into(),
//!     kind: ItemKind::Post,
//!     title: "Kubernetes Basics".into(),
//!     description: "An introduction".into(),
//!     url: "/posts/k8s-basics".into(),
//!     category: None,
//!     tags: vec!["k8s".into()],
//!     date: None,
//! }];
//!
//! let index = build_index(items);
//! let results = search(&index, "kubernetes", &SearchFilters::default());
//! assert_eq!(results[0].item.id, "k8s-basics");
//! ```

// Module declarations
mod facets;
mod fuzzy;
mod highlight;
mod index;
mod scoring;
mod search;
mod suggest;
mod taxonomy;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use facets::{extract_facets, Facets};
pub use highlight::{highlight_text, MARK_CLOSE, MARK_OPEN};
pub use index::{build_index, Index};
pub use scoring::{
    combine_field_scores, field_weight, fuzzy_score, CATEGORY_WEIGHT, DESCRIPTION_WEIGHT,
    MAX_EDIT_DISTANCE, MIN_MATCH_LEN, SCORE_THRESHOLD, TAGS_WEIGHT, TITLE_WEIGHT,
    TOTAL_FIELD_WEIGHT,
};
pub use search::search;
pub use suggest::{calculate_similarity, get_did_you_mean, get_suggestions};
pub use taxonomy::{kind_color, kind_label, POPULAR_SEARCHES, TYPE_COLORS, TYPE_LABELS};
pub use types::{
    FieldMatch, ItemKind, MatchField, SearchFilters, SearchItem, SearchResult, SortDirection,
    SortKey,
};
pub use utils::{common_prefix_len_chars, normalize, parse_query};
