use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    widgets::*,
};

use crate::{
    state::SpotlightLayout,
    theme::Theme,
    view_models::spotlight::{ItemRow, Segment, SpotlightRow, SpotlightViewModel},
};

/// Where each part of the popup goes for a given screen size
#[derive(Debug, Clone, Copy)]
pub struct SpotlightAreas {
    pub popup: Rect,
    pub input: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl SpotlightAreas {
    /// Centered horizontally, a fifth of the way down
    pub fn new(area: Rect) -> Self {
        let width = percent(area.width, 60).clamp(area.width.min(40), 90);
        let height = percent(area.height, 70).clamp(area.height.min(10), 24);
        let popup = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 5,
            width,
            height,
        };

        let inner = popup.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Min(1),    // Results
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        Self {
            popup,
            input: chunks[0],
            list: chunks[1],
            footer: chunks[2],
        }
    }

    /// Geometry to remember for hit-testing the next mouse event
    pub fn layout(&self, vm: &SpotlightViewModel) -> SpotlightLayout {
        SpotlightLayout {
            popup: self.popup,
            list: self.list,
            rows: vm.row_indices.clone(),
            scroll_offset: vm.scroll_offset,
        }
    }
}

/// `value * pct / 100` without overflowing `u16` on very large terminals
fn percent(value: u16, pct: u16) -> u16 {
    (u32::from(value) * u32::from(pct) / 100) as u16
}

fn segment_spans<'a>(segments: &'a [Segment], base: Style, theme: &Theme) -> Vec<Span<'a>> {
    segments
        .iter()
        .map(|segment| {
            let style = if segment.matched {
                base.patch(theme.matched())
            } else {
                base
            };
            Span::styled(segment.text.as_str(), style)
        })
        .collect()
}

fn item_line<'a>(row: &'a ItemRow, width: usize, theme: &Theme) -> Line<'a> {
    let base = if row.active {
        theme.selected()
    } else if row.disabled {
        Style::default().fg(theme.disabled_fg)
    } else {
        theme.text()
    };
    let muted = if row.active { base } else { base.patch(theme.muted()) };

    let mut spans = vec![Span::styled(if row.active { "> " } else { "  " }, base)];
    if let Some(ref icon) = row.icon {
        spans.push(Span::styled(format!("{} ", icon), muted));
    }
    spans.extend(segment_spans(&row.label, base, theme));
    if let Some(ref description) = row.description {
        spans.push(Span::styled("  ", muted));
        spans.extend(segment_spans(description, muted, theme));
    }

    // Right-align the trailing hint
    if let Some(ref right) = row.right_section {
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = width.saturating_sub(used + right.chars().count() + 1);
        spans.push(Span::styled(" ".repeat(padding), base));
        spans.push(Span::styled(format!("{} ", right), muted));
    } else {
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), base));
    }

    Line::from(spans)
}

/// Render the spotlight popup
/// Pure presentation - uses pre-computed view model
pub fn render_spotlight(f: &mut Frame, areas: &SpotlightAreas, vm: &SpotlightViewModel, theme: &Theme) {
    f.render_widget(Clear, areas.popup);

    let title = format!(" Spotlight ({} results) ", vm.result_count);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.panel_border())
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, areas.popup);

    // Search input
    let input_style = if vm.show_placeholder {
        theme.muted()
    } else {
        theme.text()
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", theme.key_hint()),
        Span::styled(vm.input_text.as_str(), input_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if vm.input_focused {
                theme.accent_primary
            } else {
                theme.text_muted
            }))
            .style(Style::default().bg(theme.bg_secondary)),
    );
    f.render_widget(input, areas.input);

    if vm.input_focused {
        let typed = if vm.show_placeholder {
            0
        } else {
            vm.input_text.chars().count() as u16
        };
        let x = (areas.input.x + 3 + typed).min(areas.input.right().saturating_sub(2));
        f.set_cursor_position((x, areas.input.y + 1));
    }

    // Results
    if let Some(message) = vm.empty_message {
        let empty = Paragraph::new(message)
            .style(theme.muted())
            .alignment(Alignment::Center);
        f.render_widget(empty, areas.list);
    } else {
        let width = areas.list.width as usize;
        let lines: Vec<Line> = vm
            .visible_rows
            .iter()
            .map(|row| match row {
                SpotlightRow::Header(name) => Line::from(Span::styled(name.as_str(), theme.section_header())),
                SpotlightRow::Item(item) => item_line(item, width, theme),
            })
            .collect();
        f.render_widget(Paragraph::new(lines).style(theme.panel_background()), areas.list);
    }

    let footer = Line::from(vec![
        Span::styled("↑/↓", theme.key_hint()),
        Span::styled(" navigate  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" run  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" close", theme.muted()),
    ]);
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), areas.footer);
}
