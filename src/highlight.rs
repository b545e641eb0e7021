// SPDX-License-Identifier: Apache-2.0

//! Rebuilding match-highlighted text from span metadata.
//!
//! The renderer hands back the text of a field plus the matches recorded on a
//! result; this module wraps each matched span in `<mark>` so the styling
//! layer can attach a highlight. Spans are assumed non-overlapping per field -
//! that is what the matcher produces - and no deduplication is attempted.

use crate::types::{FieldMatch, MatchField};

/// Opening marker inserted before each matched span.
pub const MARK_OPEN: &str = "<mark>";

/// Closing marker inserted after each matched span.
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap the matched spans of `text` in highlight markers.
///
/// Only matches on the title and description fields apply, and only when the
/// match's recorded value equals `text` - this guards against applying one
/// field's indices to another field's text. With no applicable matches the
/// text is returned unchanged, character for character.
///
/// Spans are inclusive `[start, end]` character ranges. They are applied in
/// ascending start order; all non-matched text is preserved verbatim.
pub fn highlight_text(text: &str, matches: &[FieldMatch]) -> String {
    let mut spans: Vec<(usize, usize)> = matches
        .iter()
        .filter(|m| {
            matches!(m.field, MatchField::Title | MatchField::Description) && m.value == text
        })
        .flat_map(|m| m.spans.iter().copied())
        .collect();
    if spans.is_empty() {
        return text.to_string();
    }
    spans.sort_unstable();

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + spans.len() * (MARK_OPEN.len() + MARK_CLOSE.len()));
    let mut cursor = 0usize;

    for (start, end) in spans {
        if start >= chars.len() {
            continue;
        }
        let end = end.min(chars.len() - 1);
        if start > cursor {
            out.extend(&chars[cursor..start]);
        }
        out.push_str(MARK_OPEN);
        out.extend(&chars[start..=end]);
        out.push_str(MARK_CLOSE);
        cursor = end + 1;
    }
    if cursor < chars.len() {
        out.extend(&chars[cursor..]);
    }
    out
}
