use spotlight_engine::{Highlight, SpotlightView};

/// Text shown when the query matches nothing
pub const EMPTY_MESSAGE: &str = "Nothing found...";
pub const PLACEHOLDER: &str = "Search pages and commands...";

/// View model for the spotlight popup - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct SpotlightViewModel {
    /// Query text, or the placeholder when empty
    pub input_text: String,
    pub show_placeholder: bool,
    /// Whether the input draws a cursor
    pub input_focused: bool,
    /// Rows visible in the list viewport (headers and actions)
    pub visible_rows: Vec<SpotlightRow>,
    /// Flattened index per visible row; `None` for headers
    pub row_indices: Vec<Option<usize>>,
    pub scroll_offset: usize,
    /// Number of actions in the result list
    pub result_count: usize,
    /// Set when there is nothing to list
    pub empty_message: Option<&'static str>,
}

/// A single line of the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotlightRow {
    Header(String),
    Item(ItemRow),
}

/// A selectable result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub active: bool,
    pub disabled: bool,
    pub icon: Option<String>,
    pub label: Vec<Segment>,
    pub description: Option<Vec<Segment>>,
    pub right_section: Option<String>,
}

/// A run of text, marked when it is the query match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

fn segments(highlight: &Highlight<'_>) -> Vec<Segment> {
    match highlight {
        Highlight::Plain(text) => vec![Segment {
            text: text.to_string(),
            matched: false,
        }],
        Highlight::Match {
            prefix,
            matched,
            suffix,
        } => [(prefix, false), (matched, true), (suffix, false)]
            .into_iter()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, matched)| Segment {
                text: text.to_string(),
                matched,
            })
            .collect(),
    }
}

/// Smallest scroll change that puts `row` inside the viewport
pub fn scroll_to_nearest(offset: usize, row: usize, visible: usize) -> usize {
    if visible == 0 {
        offset
    } else if row < offset {
        row
    } else if row >= offset + visible {
        row + 1 - visible
    } else {
        offset
    }
}

/// Every row of the list, unclipped, with the flattened index of action rows
fn all_rows(view: &SpotlightView<'_>) -> Vec<(SpotlightRow, Option<usize>)> {
    let mut rows = Vec::with_capacity(view.len() + view.groups.len());
    for group in &view.groups {
        if !group.is_ungrouped() {
            rows.push((SpotlightRow::Header(group.key.to_string()), None));
        }
        for index in group.indices() {
            let Some(item) = view.item(index) else {
                continue;
            };
            rows.push((
                SpotlightRow::Item(ItemRow {
                    active: item.active,
                    disabled: item.action.disabled,
                    icon: item.action.icon.clone(),
                    label: segments(&item.label),
                    description: item.description.as_ref().map(segments),
                    right_section: item.action.right_section.clone(),
                }),
                Some(index),
            ));
        }
    }
    rows
}

impl SpotlightViewModel {
    /// Build the view model for one frame
    ///
    /// `scroll_target` is the flattened index the engine last asked to bring
    /// into view; without one the previous offset is kept.
    pub fn from_view(
        view: &SpotlightView<'_>,
        input_focused: bool,
        scroll_offset: usize,
        scroll_target: Option<usize>,
        visible_height: usize,
    ) -> Self {
        let rows = all_rows(view);

        let target_row = scroll_target
            .and_then(|target| rows.iter().position(|(_, index)| *index == Some(target)));
        let mut scroll_offset = scroll_offset;
        if let Some(row) = target_row {
            // Reveal the group header too when scrolling up to a group's first item
            let row = match row.checked_sub(1).map(|r| &rows[r].0) {
                Some(SpotlightRow::Header(_)) if row <= scroll_offset => row - 1,
                _ => row,
            };
            scroll_offset = scroll_to_nearest(scroll_offset, row, visible_height);
        }
        let scroll_offset = scroll_offset.min(rows.len().saturating_sub(visible_height));

        let (visible_rows, row_indices): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .unzip();

        Self {
            input_text: if view.query.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                view.query.to_string()
            },
            show_placeholder: view.query.is_empty(),
            input_focused,
            visible_rows,
            row_indices,
            scroll_offset,
            result_count: view.len(),
            empty_message: view.is_empty().then_some(EMPTY_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use spotlight_engine::{SpotlightAction, SpotlightOptions};

    use super::*;

    fn create_test_actions() -> Vec<SpotlightAction> {
        vec![
            SpotlightAction::new("home", "Home").group("Pages"),
            SpotlightAction::new("buttons", "Buttons").group("Pages"),
            SpotlightAction::new("quit", "Quit").group("General"),
            SpotlightAction::new("docs", "Open docs").description("Read the docs"),
        ]
    }

    fn item_indices(vm: &SpotlightViewModel) -> Vec<Option<usize>> {
        vm.row_indices.clone()
    }

    #[test]
    fn test_scroll_to_nearest() {
        assert_eq!(scroll_to_nearest(0, 2, 5), 0);
        assert_eq!(scroll_to_nearest(0, 5, 5), 1);
        assert_eq!(scroll_to_nearest(4, 1, 5), 1);
        assert_eq!(scroll_to_nearest(3, 3, 0), 3);
    }

    #[test]
    fn test_rows_include_group_headers() {
        let actions = create_test_actions();
        let options = SpotlightOptions::default();
        let view = SpotlightView::build(&actions, "", 0, &options);

        let vm = SpotlightViewModel::from_view(&view, true, 0, None, 10);
        assert_eq!(
            item_indices(&vm),
            vec![None, Some(0), Some(1), None, Some(2), Some(3)]
        );
        assert_eq!(vm.visible_rows[0], SpotlightRow::Header("Pages".to_string()));
        assert!(vm.show_placeholder);
        assert_eq!(vm.result_count, 4);
        assert_eq!(vm.empty_message, None);
    }

    #[test]
    fn test_scroll_target_moves_viewport() {
        let actions = create_test_actions();
        let options = SpotlightOptions::default();
        let view = SpotlightView::build(&actions, "", 3, &options);

        // Row of flattened index 3 is the sixth row
        let vm = SpotlightViewModel::from_view(&view, true, 0, Some(3), 3);
        assert_eq!(vm.scroll_offset, 3);
        assert_eq!(item_indices(&vm), vec![None, Some(2), Some(3)]);

        // Scrolling back to the first item also reveals its header
        let vm = SpotlightViewModel::from_view(&view, true, 3, Some(0), 3);
        assert_eq!(vm.scroll_offset, 0);
    }

    #[test]
    fn test_highlight_segments() {
        let actions = create_test_actions();
        let options = SpotlightOptions::default();
        let view = SpotlightView::build(&actions, "doc", 0, &options);

        let vm = SpotlightViewModel::from_view(&view, true, 0, None, 10);
        let SpotlightRow::Item(row) = &vm.visible_rows[0] else {
            panic!("ungrouped result should have no header");
        };
        assert_eq!(
            row.label,
            vec![
                Segment {
                    text: "Open ".to_string(),
                    matched: false
                },
                Segment {
                    text: "doc".to_string(),
                    matched: true
                },
                Segment {
                    text: "s".to_string(),
                    matched: false
                },
            ]
        );
        assert!(row.active);
        assert_eq!(vm.input_text, "doc");
    }

    #[test]
    fn test_empty_results() {
        let actions = create_test_actions();
        let options = SpotlightOptions::default();
        let view = SpotlightView::build(&actions, "zzz", 0, &options);

        let vm = SpotlightViewModel::from_view(&view, false, 2, None, 10);
        assert!(vm.visible_rows.is_empty());
        assert_eq!(vm.scroll_offset, 0);
        assert_eq!(vm.empty_message, Some(EMPTY_MESSAGE));
    }
}
