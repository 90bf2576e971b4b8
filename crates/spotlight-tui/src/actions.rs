use std::time::Duration;

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use spotlight_engine::SpotlightMsg;

use crate::state::{Page, SpotlightLayout};

/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone)]
pub enum Action {
    // Raw terminal input, routed in the main loop
    Key(KeyEvent),
    Mouse(MouseEvent),

    // Spotlight overlay (forwarded to the engine)
    Spotlight(SpotlightMsg),

    // Engine events turned into state updates
    SpotlightOpenChanged(bool),
    SpotlightFocusRequested(Duration),
    SpotlightScrollIntoView(usize),
    SpotlightTriggered(String),

    // Catalogue
    NavigateTo(Page),
    ToggleTheme,

    // Debug console (Quake-style drop-down)
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,

    // Render feedback (dispatched after drawing)
    UpdateSpotlightLayout(Option<SpotlightLayout>),
    UpdateDebugConsoleViewport(usize),

    Quit,
    None,
}
