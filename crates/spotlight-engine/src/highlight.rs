//! First-match highlighting for rendered fields

use crate::matcher::find_ignore_case;

/// A field's text, split around the first query match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// No query or no match; render without emphasis
    Plain(&'a str),
    Match {
        prefix: &'a str,
        /// Matched text with its original casing
        matched: &'a str,
        suffix: &'a str,
    },
}

impl<'a> Highlight<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// The full text, unsplit
    pub fn text(&self) -> String {
        match self {
            Self::Plain(text) => (*text).to_string(),
            Self::Match {
                prefix,
                matched,
                suffix,
            } => format!("{prefix}{matched}{suffix}"),
        }
    }
}

/// Split `text` around the first case-insensitive occurrence of `query`
///
/// Only the first occurrence is marked.
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    if query.is_empty() {
        return Highlight::Plain(text);
    }

    match find_ignore_case(text, query) {
        Some(range) => Highlight::Match {
            prefix: &text[..range.start],
            matched: &text[range.clone()],
            suffix: &text[range.end..],
        },
        None => Highlight::Plain(text),
    }
}
