use ratatui::{prelude::*, widgets::*};

use crate::{state::DebugConsoleState, theme::Theme};

/// Render the debug console as a Quake-style drop-down panel
/// Returns the visible viewport height
pub fn render_debug_console(
    f: &mut Frame,
    area: Rect,
    console_state: &DebugConsoleState,
    theme: &Theme,
) -> usize {
    let console_height = (area.height * console_state.height_percent) / 100;
    let console_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: console_height.min(area.height),
    };

    f.render_widget(Clear, console_area);

    let visible_height = console_height.saturating_sub(2) as usize; // Subtract borders

    let (log_items, total_logs, scroll_offset) = match console_state.logs.lock() {
        Ok(logs) => {
            let total_logs = logs.len();
            let max_offset = total_logs.saturating_sub(visible_height);
            let scroll_offset = if console_state.auto_scroll {
                max_offset
            } else {
                console_state.scroll_offset.min(max_offset)
            };

            let items: Vec<ListItem> = logs
                .iter()
                .skip(scroll_offset)
                .take(visible_height)
                .map(|entry| {
                    use ::log::Level;

                    let level_color = match entry.level {
                        Level::Error => theme.status_error,
                        Level::Warn => theme.status_warning,
                        Level::Info => theme.text_primary,
                        Level::Debug => theme.text_secondary,
                        Level::Trace => theme.text_muted,
                    };

                    let timestamp = entry.timestamp.format("%H:%M:%S%.3f");
                    let level_str = format!("{:5}", entry.level.to_string().to_uppercase());
                    let target_short = if entry.target.chars().count() > 24 {
                        let head: String = entry.target.chars().take(21).collect();
                        format!("{}...", head)
                    } else {
                        format!("{:24}", entry.target)
                    };

                    ListItem::new(format!(
                        "{} {} {} {}",
                        timestamp, level_str, target_short, entry.message
                    ))
                    .style(Style::default().fg(level_color))
                })
                .collect();

            (items, total_logs, scroll_offset)
        }
        Err(_) => (Vec::new(), 0, 0),
    };

    let logs_list = List::new(log_items).block(
        Block::bordered()
            .title(format!(
                " Debug Console ({}/{}) {} ",
                scroll_offset + visible_height.min(total_logs),
                total_logs,
                if console_state.auto_scroll {
                    "[AUTO]"
                } else {
                    "[MANUAL]"
                }
            ))
            .title_bottom(" `~` Close | j/k Scroll | a Auto-scroll | c Clear ")
            .border_style(Style::default().fg(theme.accent_primary))
            .style(Style::default().bg(theme.bg_secondary)),
    );

    f.render_widget(logs_list, console_area);

    visible_height
}
