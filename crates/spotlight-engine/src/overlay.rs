//! Open/closed lifecycle of the spotlight overlay
//!
//! The reducer is pure: it takes the current state, a message and the view
//! computed for the current render, and returns the next state plus the
//! effects the store should perform. It never calls triggers itself.

use std::time::Duration;

use crate::navigation::{Navigation, ScrollIntoView};
use crate::shortcut::{Key, KeyInput};
use crate::spotlight::SpotlightOptions;
use crate::view::SpotlightView;

/// Why the overlay closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    /// Backdrop or outside-the-dialog interaction
    Outside,
    /// An action was triggered
    Selection,
    /// The global shortcut toggled it off
    Shortcut,
    /// Controlled close requested by the host
    External,
}

/// Messages the overlay reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotlightMsg {
    /// Global shortcut pressed
    Toggle,
    /// Controlled open state from the host
    SetOpen(bool),
    Close(CloseReason),
    SetQuery(String),
    /// ArrowDown
    Next,
    /// ArrowUp
    Prev,
    /// Pointer over the row at this flattened index
    Hover(usize),
    /// Enter on the active row
    Execute,
    /// Pointer activation of the row at this flattened index
    Click(usize),
    /// The post-open focus delay elapsed
    FocusInput,
}

/// Effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenChanged(bool),
    /// Focus the query input once `after` has elapsed
    RequestFocus { after: Duration },
    ScrollIntoView(ScrollIntoView),
    /// Invoke the trigger of the flattened action at `index`
    Trigger { index: usize },
}

/// Engine-owned overlay state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotlightState {
    pub open: bool,
    pub query: String,
    pub navigation: Navigation,
    pub input_focused: bool,
}

impl SpotlightState {
    pub fn active_index(&self) -> usize {
        self.navigation.active_index()
    }

    fn reset_session(&mut self) {
        self.query.clear();
        self.navigation.reset();
        self.input_focused = false;
    }
}

/// Map the in-overlay navigation keys (arrows, Enter) to messages
///
/// Toggle and Escape are handled by the shortcut manager, and text entry
/// belongs to the host's input field.
pub fn navigation_msg(input: &KeyInput) -> Option<SpotlightMsg> {
    match input.key {
        Key::Down => Some(SpotlightMsg::Next),
        Key::Up => Some(SpotlightMsg::Prev),
        Key::Enter => Some(SpotlightMsg::Execute),
        _ => None,
    }
}

pub fn reduce(
    mut state: SpotlightState,
    msg: &SpotlightMsg,
    view: &SpotlightView<'_>,
    options: &SpotlightOptions,
) -> (SpotlightState, Vec<Effect>) {
    let mut effects = Vec::new();

    match msg {
        SpotlightMsg::Toggle => {
            if state.open {
                close(&mut state, CloseReason::Shortcut, &mut effects);
            } else {
                open(&mut state, options, &mut effects);
            }
        }
        SpotlightMsg::SetOpen(true) => {
            if !state.open {
                open(&mut state, options, &mut effects);
            }
        }
        SpotlightMsg::SetOpen(false) => close(&mut state, CloseReason::External, &mut effects),
        SpotlightMsg::Close(reason) => close(&mut state, *reason, &mut effects),
        _ if !state.open => {
            // Everything below only applies to an open overlay
        }
        SpotlightMsg::SetQuery(query) => {
            if *query != state.query {
                state.query = query.clone();
                state.navigation.reset();
                effects.push(Effect::ScrollIntoView(ScrollIntoView { index: 0 }));
            }
        }
        SpotlightMsg::Next => {
            effects.extend(state.navigation.next(view.len()).map(Effect::ScrollIntoView));
        }
        SpotlightMsg::Prev => {
            effects.extend(state.navigation.prev(view.len()).map(Effect::ScrollIntoView));
        }
        SpotlightMsg::Hover(index) => {
            effects.extend(
                state
                    .navigation
                    .hover(*index, view.len())
                    .map(Effect::ScrollIntoView),
            );
        }
        SpotlightMsg::Execute => {
            let index = state.navigation.active_index();
            select(&mut state, index, view, options, &mut effects);
        }
        SpotlightMsg::Click(index) => {
            select(&mut state, *index, view, options, &mut effects);
        }
        SpotlightMsg::FocusInput => {
            state.input_focused = true;
        }
    }

    (state, effects)
}

fn open(state: &mut SpotlightState, options: &SpotlightOptions, effects: &mut Vec<Effect>) {
    state.reset_session();
    state.open = true;
    log::debug!("spotlight opened");
    effects.push(Effect::OpenChanged(true));
    effects.push(Effect::RequestFocus {
        after: options.focus_delay,
    });
}

fn close(state: &mut SpotlightState, reason: CloseReason, effects: &mut Vec<Effect>) {
    if !state.open {
        return;
    }
    state.reset_session();
    state.open = false;
    log::debug!("spotlight closed ({:?})", reason);
    effects.push(Effect::OpenChanged(false));
}

fn select(
    state: &mut SpotlightState,
    index: usize,
    view: &SpotlightView<'_>,
    options: &SpotlightOptions,
    effects: &mut Vec<Effect>,
) {
    let Some(action) = view.get(index) else {
        return;
    };
    if action.disabled {
        log::debug!("ignoring selection of disabled action {}", action.id);
        return;
    }

    log::debug!("triggering action {}", action.id);
    effects.push(Effect::Trigger { index });
    if options.close_on_trigger {
        close(state, CloseReason::Selection, effects);
    } else {
        state.navigation.hover(index, view.len());
    }
}
