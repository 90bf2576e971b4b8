use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::*,
};

use crate::{
    state::{AppState, Page},
    theme::Theme,
};

/// Sample content for each catalogue page
fn page_body(page: Page, theme: &Theme) -> Vec<Line<'static>> {
    let badge = |label: &'static str, bg: Color| {
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    match page {
        Page::Home => vec![
            Line::from(Span::styled("Component catalogue", theme.section_header())),
            Line::default(),
            Line::from("Browse the pages with 1-5 or jump anywhere with the spotlight."),
            Line::from("Type to filter, use the arrow keys to move and Enter to open."),
        ],
        Page::Buttons => vec![
            Line::from(Span::styled("Variants", theme.section_header())),
            Line::default(),
            Line::from(vec![
                badge("Filled", theme.accent_primary),
                Span::raw("  "),
                badge("Danger", theme.status_error),
                Span::raw("  "),
                Span::styled("[ Outline ]", Style::default().fg(theme.accent_primary)),
                Span::raw("  "),
                Span::styled("Subtle", theme.muted()),
            ]),
        ],
        Page::Cards => vec![
            Line::from(Span::styled("Card", theme.section_header())),
            Line::default(),
            Line::from("+------------------------------+"),
            Line::from("| Norway fjord adventures      |"),
            Line::from("| With sections and an action  |"),
            Line::from("| [ Book classic tour now ]    |"),
            Line::from("+------------------------------+"),
        ],
        Page::Alerts => vec![
            Line::from(Span::styled("Alerts", theme.section_header())),
            Line::default(),
            Line::from(Span::styled("i  Something happened", Style::default().fg(theme.accent_primary))),
            Line::from(Span::styled("✓  Saved successfully", Style::default().fg(theme.status_success))),
            Line::from(Span::styled("!  Check your input", Style::default().fg(theme.status_warning))),
            Line::from(Span::styled("x  Request failed", Style::default().fg(theme.status_error))),
        ],
        Page::Docs => vec![
            Line::from(Span::styled("Theming", theme.section_header())),
            Line::default(),
            Line::from("Press t (or search \"theme\") to switch between light and dark."),
            Line::from("Extra spotlight entries can be declared in spotlight.toml:"),
            Line::default(),
            Line::from(Span::styled("  [[actions]]", theme.muted())),
            Line::from(Span::styled("  id = \"docs\"", theme.muted())),
            Line::from(Span::styled("  label = \"Read the docs\"", theme.muted())),
            Line::from(Span::styled("  command = \"page:docs\"", theme.muted())),
        ],
    }
}

/// Render page tabs, the current page and the status line
pub fn render_catalogue(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    f.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();
    let selected = Page::ALL
        .iter()
        .position(|p| *p == state.ui.page)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.muted())
        .highlight_style(theme.key_hint())
        .block(
            Block::bordered()
                .title(" Catalogue ")
                .border_style(Style::default().fg(theme.accent_primary)),
        );
    f.render_widget(tabs, chunks[0]);

    let page = state.ui.page;
    let body = Paragraph::new(page_body(page, theme))
        .style(theme.text())
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(format!(" {} ", page.title()))
                .title_bottom(Line::from(format!(" {} ", page.description())).right_aligned())
                .border_style(Style::default().fg(theme.text_muted)),
        );
    f.render_widget(body, chunks[1]);

    let status = state.ui.status.as_deref().unwrap_or("Ready");
    let status_line = Line::from(vec![
        Span::styled(format!(" {} ", status), theme.text()),
        Span::styled("│ ", theme.muted()),
        Span::styled(state.config.shortcut_hint(), theme.key_hint()),
        Span::styled(" search  ", theme.muted()),
        Span::styled("t", theme.key_hint()),
        Span::styled(" theme  ", theme.muted()),
        Span::styled("`", theme.key_hint()),
        Span::styled(" console  ", theme.muted()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" quit", theme.muted()),
    ]);
    f.render_widget(
        Paragraph::new(status_line).style(Style::default().bg(theme.bg_secondary)),
        chunks[2],
    );
}
