// SPDX-License-Identifier: Apache-2.0

//! Facet extraction for filter UIs.

use serde::Serialize;

use crate::types::{ItemKind, SearchItem};

/// The distinct filterable dimensions present in an item collection.
///
/// Used to populate filter-selection UI; the query engine itself never reads
/// this. Order is insertion-based and not significant.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub kinds: Vec<ItemKind>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Derive the distinct kinds, defined categories, and union of tags across
/// `items`, each deduplicated.
pub fn extract_facets(items: &[SearchItem]) -> Facets {
    let mut facets = Facets::default();
    for item in items {
        if !facets.kinds.contains(&item.kind) {
            facets.kinds.push(item.kind);
        }
        if let Some(category) = &item.category {
            if !facets.categories.contains(category) {
                facets.categories.push(category.clone());
            }
        }
        for tag in &item.tags {
            if !facets.tags.contains(tag) {
                facets.tags.push(tag.clone());
            }
        }
    }
    facets
}
