// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! `build_index` folds every matchable field of every item up front so that
//! queries never re-normalize text. The result is immutable: rebuilding on a
//! content update means constructing a new `Index` and swapping the reference,
//! never mutating in place. Because nothing is ever written after
//! construction, the index can be shared freely across threads.

use crate::fuzzy::{split_words, Word};
use crate::types::SearchItem;
use crate::utils::fold_case;

/// One matchable field, pre-folded for the matcher.
///
/// Invariant: `folded.len()` equals `raw.chars().count()`, so a span in folded
/// indices is a span in the original text.
#[derive(Debug, Clone)]
pub(crate) struct FieldText {
    pub raw: String,
    pub folded: Vec<char>,
    pub words: Vec<Word>,
}

impl FieldText {
    fn new(raw: &str) -> Self {
        let folded = fold_case(raw);
        let words = split_words(&folded);
        FieldText {
            raw: raw.to_string(),
            folded,
            words,
        }
    }
}

/// Pre-folded fields of one item, parallel to `Index::items`.
#[derive(Debug, Clone)]
pub(crate) struct ItemFields {
    pub title: FieldText,
    pub description: FieldText,
    pub category: Option<FieldText>,
    pub tags: Vec<FieldText>,
}

/// An immutable weighted fuzzy-search index over a collection of items.
///
/// Built once per full item collection; supports repeated queries without
/// rebuilding. An index over an empty collection is legal and matches nothing.
#[derive(Debug, Clone)]
pub struct Index {
    items: Vec<SearchItem>,
    fields: Vec<ItemFields>,
}

impl Index {
    /// The indexed items, in insertion order.
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn fields(&self) -> &[ItemFields] {
        &self.fields
    }

    /// Build an index from the content pipeline's JSON export: an array of
    /// items in the `SearchItem` wire layout.
    pub fn from_json(json: &str) -> Result<Index, serde_json::Error> {
        let items: Vec<SearchItem> = serde_json::from_str(json)?;
        Ok(build_index(items))
    }
}

/// Build a weighted fuzzy-search index over `items`.
///
/// Pure construction: no I/O, no side effects. Field weights and the matching
/// tolerance are fixed in `scoring` - title is weighted highest, description
/// baseline, category and tags below that.
pub fn build_index(items: Vec<SearchItem>) -> Index {
    let fields = items
        .iter()
        .map(|item| ItemFields {
            title: FieldText::new(&item.title),
            description: FieldText::new(&item.description),
            category: item.category.as_deref().map(FieldText::new),
            tags: item.tags.iter().map(|t| FieldText::new(t)).collect(),
        })
        .collect();

    Index { items, fields }
}
