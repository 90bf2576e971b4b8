use ratatui::layout::Rect;

use crate::{config::Config, log_capture::LogBuffer, theme::Theme};

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

/// Pages of the widget catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Buttons,
    Cards,
    Alerts,
    Docs,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Buttons,
        Page::Cards,
        Page::Alerts,
        Page::Docs,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Buttons => "buttons",
            Page::Cards => "cards",
            Page::Alerts => "alerts",
            Page::Docs => "docs",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Buttons => "Buttons",
            Page::Cards => "Cards",
            Page::Alerts => "Alerts",
            Page::Docs => "Documentation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Overview of the component catalogue",
            Page::Buttons => "Filled, outline and subtle button variants",
            Page::Cards => "Surfaces with sections, images and actions",
            Page::Alerts => "Inline feedback for info, success and errors",
            Page::Docs => "Guides for theming and composing components",
        }
    }

    /// Extra search terms for the page's spotlight entry
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Page::Home => &["start", "overview", "index"],
            Page::Buttons => &["action", "click", "cta"],
            Page::Cards => &["surface", "panel", "container"],
            Page::Alerts => &["notification", "feedback", "error"],
            Page::Docs => &["help", "guide", "theming"],
        }
    }
}

/// UI-specific state (current page, status line, quit flag)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub page: Page,
    pub status: Option<String>,
    pub should_quit: bool,
    pub spotlight: SpotlightUiState,
}

/// View-layer state of the spotlight popup
///
/// The engine owns query, selection and open state; this only tracks what
/// the terminal needs to scroll and hit-test the popup.
#[derive(Debug, Clone, Default)]
pub struct SpotlightUiState {
    /// First visible row (rows include group headers)
    pub scroll_offset: usize,
    /// Flattened index to bring into view on the next render
    pub scroll_target: Option<usize>,
    /// Geometry from the last render, for mouse hit-testing
    pub layout: Option<SpotlightLayout>,
}

/// Where the spotlight popup was drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightLayout {
    pub popup: Rect,
    pub list: Rect,
    /// Flattened index for each visible list row; `None` for group headers
    pub rows: Vec<Option<usize>>,
    pub scroll_offset: usize,
}

impl SpotlightLayout {
    /// Flattened index of the action row at a terminal cell, if any
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if column < self.list.x || column >= self.list.x + self.list.width || row < self.list.y {
            return None;
        }
        self.rows.get((row - self.list.y) as usize).copied().flatten()
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.popup.x
            && column < self.popup.x + self.popup.width
            && row >= self.popup.y
            && row < self.popup.y + self.popup.height
    }
}

#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,   // Follow new logs as they arrive
    pub height_percent: u16, // Height as percentage of screen
    pub logs: LogBuffer,
    pub viewport_height: usize, // Updated during rendering
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50,
            logs: crate::log_capture::DebugConsoleLogger::create_buffer(),
            viewport_height: 0,
        }
    }
}
