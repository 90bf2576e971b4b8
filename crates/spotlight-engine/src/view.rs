//! Render-ready output derived from the actions and the current query

use crate::action::SpotlightAction;
use crate::group::{flatten, group_actions, ActionGroup};
use crate::highlight::{highlight, Highlight};
use crate::spotlight::SpotlightOptions;

/// Everything a renderer needs for one frame
///
/// Recomputed from scratch on every call; nothing here carries over between
/// renders.
#[derive(Debug, Clone)]
pub struct SpotlightView<'a> {
    pub query: &'a str,
    /// Matching actions in original order, after the limit
    pub filtered: Vec<&'a SpotlightAction>,
    pub groups: Vec<ActionGroup<'a>>,
    /// Groups concatenated; the active index points into this list
    pub flattened: Vec<&'a SpotlightAction>,
    /// Always in range for `flattened`, or 0 when it is empty
    pub active_index: usize,
    highlight_query: bool,
}

/// One row of the result list
#[derive(Debug, Clone)]
pub struct ViewItem<'a> {
    pub action: &'a SpotlightAction,
    /// Position in the flattened list
    pub index: usize,
    pub active: bool,
    pub label: Highlight<'a>,
    pub description: Option<Highlight<'a>>,
}

impl<'a> SpotlightView<'a> {
    /// Filter, group, flatten and clamp
    pub fn build(
        actions: &'a [SpotlightAction],
        query: &'a str,
        active_index: usize,
        options: &SpotlightOptions,
    ) -> Self {
        let filtered = options.filter.apply(actions, query);
        let groups = group_actions(&filtered);
        let flattened = flatten(&groups);
        let active_index = active_index.min(flattened.len().saturating_sub(1));

        Self {
            query,
            filtered,
            groups,
            flattened,
            active_index,
            highlight_query: options.highlight_query,
        }
    }

    pub fn len(&self) -> usize {
        self.flattened.len()
    }

    /// Renderers show their "nothing found" state when this is true
    pub fn is_empty(&self) -> bool {
        self.flattened.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a SpotlightAction> {
        self.flattened.get(index).copied()
    }

    pub fn active(&self) -> Option<&'a SpotlightAction> {
        self.get(self.active_index)
    }

    pub fn item(&self, index: usize) -> Option<ViewItem<'a>> {
        let action = self.get(index)?;
        Some(ViewItem {
            action,
            index,
            active: index == self.active_index,
            label: self.highlight(&action.label),
            description: action.description.as_deref().map(|d| self.highlight(d)),
        })
    }

    /// All rows in flattened order
    pub fn items(&self) -> Vec<ViewItem<'a>> {
        (0..self.len()).filter_map(|i| self.item(i)).collect()
    }

    fn highlight(&self, text: &'a str) -> Highlight<'a> {
        if self.highlight_query {
            highlight(text, self.query)
        } else {
            Highlight::Plain(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_actions() -> Vec<SpotlightAction> {
        vec![
            SpotlightAction::new("home", "Home page").group("Pages"),
            SpotlightAction::new("theme", "Toggle theme")
                .group("General")
                .description("Switch between light and dark"),
            SpotlightAction::new("docs", "Docs page").group("Pages"),
        ]
    }

    #[test]
    fn test_flattened_follows_group_order() {
        let actions = create_test_actions();
        let view = SpotlightView::build(&actions, "", 0, &SpotlightOptions::default());

        let filtered: Vec<&str> = view.filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(filtered, vec!["home", "theme", "docs"]);
        let flat: Vec<&str> = view.flattened.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(flat, vec!["home", "docs", "theme"]);
    }

    #[test]
    fn test_active_index_is_clamped() {
        let actions = create_test_actions();
        let view = SpotlightView::build(&actions, "page", 5, &SpotlightOptions::default());
        assert_eq!(view.len(), 2);
        assert_eq!(view.active_index, 1);
        assert_eq!(view.active().map(|a| a.id.as_str()), Some("docs"));

        let view = SpotlightView::build(&actions, "nothing", 5, &SpotlightOptions::default());
        assert!(view.is_empty());
        assert_eq!(view.active_index, 0);
        assert!(view.active().is_none());
    }

    #[test]
    fn test_items_carry_highlights() {
        let actions = create_test_actions();
        let view = SpotlightView::build(&actions, "DARK", 0, &SpotlightOptions::default());
        let items = view.items();
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert!(item.active);
        assert_eq!(item.label, Highlight::Plain("Toggle theme"));
        assert_eq!(
            item.description,
            Some(Highlight::Match {
                prefix: "Switch between light and ",
                matched: "dark",
                suffix: "",
            })
        );
    }

    #[test]
    fn test_highlighting_can_be_disabled() {
        let actions = create_test_actions();
        let options = SpotlightOptions::default().with_highlight_query(false);
        let view = SpotlightView::build(&actions, "home", 0, &options);
        assert_eq!(view.items()[0].label, Highlight::Plain("Home page"));
    }
}
