use crate::{actions::Action, effect::Effect, state::*};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns (new state, effects to perform)
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    if let Action::ToggleTheme = action {
        state.theme = state.theme.toggled();
        log::debug!("Theme switched to {:?}", state.theme.mode);
    }

    let (ui_state, ui_effects) = ui_reducer(state.ui, action);
    state.ui = ui_state;
    effects.extend(ui_effects);

    let (spotlight_state, spotlight_effects) = spotlight_reducer(state.ui.spotlight, action);
    state.ui.spotlight = spotlight_state;
    effects.extend(spotlight_effects);

    let (debug_console_state, debug_console_effects) =
        debug_console_reducer(state.debug_console, action);
    state.debug_console = debug_console_state;
    effects.extend(debug_console_effects);

    (state, effects)
}

/// UI state reducer - page, status line and quit
fn ui_reducer(mut state: UiState, action: &Action) -> (UiState, Vec<Effect>) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::NavigateTo(page) => {
            if state.page != *page {
                log::debug!("Navigating to {}", page.slug());
                state.page = *page;
            }
            state.status = Some(format!("Opened {}", page.title()));
        }
        Action::SpotlightTriggered(id) => {
            log::info!("Spotlight action `{}` triggered", id);
            state.status = Some(format!("Ran `{}`", id));
        }
        _ => {}
    }

    (state, vec![])
}

/// Spotlight popup view state - scroll position and hit-test geometry
fn spotlight_reducer(
    mut state: SpotlightUiState,
    action: &Action,
) -> (SpotlightUiState, Vec<Effect>) {
    let mut effects = vec![];

    match action {
        Action::SpotlightOpenChanged(open) => {
            // Every session starts scrolled to the top
            state.scroll_offset = 0;
            state.scroll_target = None;
            if !open {
                state.layout = None;
            }
        }
        Action::SpotlightFocusRequested(after) => {
            effects.push(Effect::ScheduleSpotlightFocus { after: *after });
        }
        Action::SpotlightScrollIntoView(index) => {
            state.scroll_target = Some(*index);
        }
        Action::UpdateSpotlightLayout(layout) => {
            if let Some(layout) = layout {
                state.scroll_offset = layout.scroll_offset;
            }
            state.scroll_target = None;
            state.layout = layout.clone();
        }
        _ => {}
    }

    (state, effects)
}

fn debug_console_reducer(
    mut state: DebugConsoleState,
    action: &Action,
) -> (DebugConsoleState, Vec<Effect>) {
    let mut effects = vec![];

    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
            // Reset scroll when opening
            if state.is_open {
                state.scroll_offset = 0;
            }
        }
        Action::ScrollDebugConsoleUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            state.auto_scroll = false;
        }
        Action::ScrollDebugConsoleDown => {
            let max_offset = state
                .logs
                .lock()
                .map(|logs| logs.len().saturating_sub(state.viewport_height))
                .unwrap_or(0);
            state.scroll_offset = state.scroll_offset.saturating_add(1).min(max_offset);
            state.auto_scroll = false;
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            state.scroll_offset = 0;
            effects.push(Effect::ClearDebugLogs(state.logs.clone()));
        }
        Action::UpdateDebugConsoleViewport(height) => {
            state.viewport_height = *height;
        }
        _ => {}
    }

    (state, effects)
}
