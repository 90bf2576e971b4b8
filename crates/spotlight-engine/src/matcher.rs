//! Case-insensitive substring matching

use std::ops::Range;

use crate::action::SpotlightAction;

/// Check whether an action matches a query
///
/// Tests `label`, then `description`, then each keyword. An empty query
/// matches every action; any other query, whitespace included, is a plain
/// substring.
pub fn matches(action: &SpotlightAction, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    contains_ignore_case(&action.label, query)
        || action
            .description
            .as_deref()
            .is_some_and(|d| contains_ignore_case(d, query))
        || action.keywords.iter().any(|k| contains_ignore_case(k, query))
}

pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    find_ignore_case(text, query).is_some()
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`
///
/// Characters are compared one by one after lowercasing, so the returned
/// range always lies on char boundaries of `text` even when lowercasing
/// changes byte lengths. An empty query matches at `0..0`.
pub fn find_ignore_case(text: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return Some(0..0);
    }

    text.char_indices()
        .find_map(|(start, _)| match_len_at(&text[start..], query).map(|len| start..start + len))
}

/// Length in bytes of `haystack`'s prefix matching `needle`, if any
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !chars_eq_ignore_case(h, n) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(i, _)| i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
