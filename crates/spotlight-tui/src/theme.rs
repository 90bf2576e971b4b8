use ratatui::{prelude::*, style::palette::tailwind};

/// Light or dark palette, switched at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    /// Background behind the matched part of a spotlight result
    pub match_bg: Color,
    pub disabled_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default) - Cyan/Magenta color scheme
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::CYAN.c50,
            text_secondary: tailwind::CYAN.c200,
            text_muted: tailwind::CYAN.c700,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::CYAN.c400,
            status_error: tailwind::FUCHSIA.c400,
            status_warning: tailwind::PURPLE.c400,

            selected_bg: tailwind::FUCHSIA.c500,
            selected_fg: Color::White,

            match_bg: tailwind::YELLOW.c600,
            disabled_fg: tailwind::SLATE.c500,
        }
    }

    /// Light theme - same accents on a pale background
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            bg_primary: tailwind::SLATE.c50,
            bg_secondary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,

            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c700,

            status_success: tailwind::EMERALD.c700,
            status_error: tailwind::RED.c600,
            status_warning: tailwind::AMBER.c600,

            selected_bg: tailwind::CYAN.c600,
            selected_fg: Color::White,

            match_bg: tailwind::YELLOW.c300,
            disabled_fg: tailwind::SLATE.c400,
        }
    }

    /// The other palette
    pub fn toggled(&self) -> Self {
        match self.mode {
            ThemeMode::Dark => Self::light(),
            ThemeMode::Light => Self::dark(),
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds (spotlight, console)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders and titles
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Enter" in "Enter run")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active spotlight row
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the matched part of a result
    pub fn matched(&self) -> Style {
        Style::default()
            .bg(self.match_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_mode() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.toggled().mode, ThemeMode::Light);
        assert_eq!(theme.toggled().toggled().mode, ThemeMode::Dark);
    }
}
