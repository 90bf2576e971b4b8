//! Filtering of actions against the current query

use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::action::SpotlightAction;
use crate::matcher::matches;

/// Number of results shown when no limit is configured
pub const DEFAULT_LIMIT: usize = 10;

/// Caller-supplied replacement for the built-in filter
///
/// Receives the query and every action, and returns the visible subset in
/// display order. Nothing else (matching, limit) is applied afterwards.
pub type CustomFilter =
    Rc<dyn for<'a> Fn(&str, &'a [SpotlightAction]) -> Vec<&'a SpotlightAction>>;

/// How the visible list is computed for a render
#[derive(Clone)]
pub enum FilterStrategy {
    /// Substring matching, original order, truncated to `limit`
    Default { limit: usize },
    Custom(CustomFilter),
}

impl FilterStrategy {
    pub fn custom<F>(f: F) -> Self
    where
        F: for<'a> Fn(&str, &'a [SpotlightAction]) -> Vec<&'a SpotlightAction> + 'static,
    {
        Self::Custom(Rc::new(f))
    }

    pub fn apply<'a>(&self, actions: &'a [SpotlightAction], query: &str) -> Vec<&'a SpotlightAction> {
        match self {
            Self::Default { limit } => filter_actions(actions, query, *limit),
            Self::Custom(f) => f(query, actions),
        }
    }
}

impl Default for FilterStrategy {
    fn default() -> Self {
        Self::Default {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Debug for FilterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default { limit } => f.debug_struct("Default").field("limit", limit).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Keep the actions matching `query`, in their original order, up to `limit`
///
/// Results are never reordered by match quality.
pub fn filter_actions<'a>(
    actions: &'a [SpotlightAction],
    query: &str,
    limit: usize,
) -> Vec<&'a SpotlightAction> {
    actions
        .iter()
        .filter(|action| matches(action, query))
        .take(limit)
        .collect()
}
