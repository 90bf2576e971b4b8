use crate::{actions::Action, effect::Effect, reducer::reduce, state::AppState};

/// Redux-style Store that holds application state and dispatches actions
///
/// Only host state lives here. The spotlight engine keeps its own state and
/// reports changes back as actions.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to update state
    ///
    /// Returns the effects the reducers asked for; the caller executes them.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let (new_state, effects) = reduce(self.state.clone(), &action);
        self.state = new_state;
        effects
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
