//! Grouping of filtered actions into display sections

use indexmap::IndexMap;

use crate::action::SpotlightAction;

/// A named section of the result list
#[derive(Debug, Clone)]
pub struct ActionGroup<'a> {
    /// Group heading; `""` for ungrouped actions
    pub key: &'a str,
    pub actions: Vec<&'a SpotlightAction>,
    /// Flattened index of the first action in this group
    pub start: usize,
}

impl ActionGroup<'_> {
    pub fn is_ungrouped(&self) -> bool {
        self.key.is_empty()
    }

    /// Flattened indices covered by this group
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.actions.len()
    }
}

/// Partition a filtered list into groups, in first-seen order
///
/// Actions keep their filtered order inside each group.
pub fn group_actions<'a>(filtered: &[&'a SpotlightAction]) -> Vec<ActionGroup<'a>> {
    let mut buckets: IndexMap<&'a str, Vec<&'a SpotlightAction>> = IndexMap::new();
    for &action in filtered {
        buckets.entry(action.group_key()).or_default().push(action);
    }

    let mut start = 0;
    buckets
        .into_iter()
        .map(|(key, actions)| {
            let group = ActionGroup {
                key,
                actions,
                start,
            };
            start += group.actions.len();
            group
        })
        .collect()
}

/// Concatenate groups into the list the active index points into
pub fn flatten<'a>(groups: &[ActionGroup<'a>]) -> Vec<&'a SpotlightAction> {
    groups
        .iter()
        .flat_map(|g| g.actions.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_actions() -> Vec<SpotlightAction> {
        vec![
            SpotlightAction::new("home", "Home").group("Pages"),
            SpotlightAction::new("theme", "Toggle theme").group("General"),
            SpotlightAction::new("docs", "Docs").group("Pages"),
            SpotlightAction::new("quit", "Quit"),
            SpotlightAction::new("console", "Console").group("General"),
        ]
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let actions = create_test_actions();
        let filtered: Vec<&SpotlightAction> = actions.iter().collect();
        let groups = group_actions(&filtered);

        let keys: Vec<&str> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["Pages", "General", ""]);
    }

    #[test]
    fn test_items_keep_filtered_order() {
        let actions = create_test_actions();
        let filtered: Vec<&SpotlightAction> = actions.iter().collect();
        let groups = group_actions(&filtered);

        let pages: Vec<&str> = groups[0].actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(pages, vec!["home", "docs"]);
        let general: Vec<&str> = groups[1].actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(general, vec!["theme", "console"]);
        assert!(groups[2].is_ungrouped());
    }

    #[test]
    fn test_flatten_and_start_offsets() {
        let actions = create_test_actions();
        let filtered: Vec<&SpotlightAction> = actions.iter().collect();
        let groups = group_actions(&filtered);

        let flat: Vec<&str> = flatten(&groups).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(flat, vec!["home", "docs", "theme", "console", "quit"]);

        assert_eq!(groups[0].indices(), 0..2);
        assert_eq!(groups[1].indices(), 2..4);
        assert_eq!(groups[2].indices(), 4..5);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_actions(&[]);
        assert!(groups.is_empty());
        assert!(flatten(&groups).is_empty());
    }
}
