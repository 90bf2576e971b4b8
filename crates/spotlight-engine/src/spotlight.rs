//! Spotlight store: owns the overlay state and runs the reducer

use std::time::Duration;

use crate::action::SpotlightAction;
use crate::filter::{FilterStrategy, DEFAULT_LIMIT};
use crate::listener::{KeyListeners, Subscription};
use crate::overlay::{reduce, CloseReason, Effect, SpotlightMsg, SpotlightState};
use crate::shortcut::{KeyInput, ShortcutBinding, ShortcutManager};
use crate::view::SpotlightView;

/// Delay between opening and requesting input focus, so the dialog can mount
pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(10);

/// Engine configuration
#[derive(Debug, Clone)]
pub struct SpotlightOptions {
    pub filter: FilterStrategy,
    /// Global toggle combos; empty disables the toggle
    pub shortcuts: Vec<ShortcutBinding>,
    pub highlight_query: bool,
    pub close_on_trigger: bool,
    pub focus_delay: Duration,
}

impl Default for SpotlightOptions {
    fn default() -> Self {
        Self {
            filter: FilterStrategy::default(),
            shortcuts: vec![ShortcutBinding::default()],
            highlight_query: true,
            close_on_trigger: true,
            focus_delay: DEFAULT_FOCUS_DELAY,
        }
    }
}

impl SpotlightOptions {
    /// Use the built-in filter with this many results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.filter = FilterStrategy::Default { limit };
        self
    }

    pub fn with_custom_filter<F>(mut self, f: F) -> Self
    where
        F: for<'a> Fn(&str, &'a [SpotlightAction]) -> Vec<&'a SpotlightAction> + 'static,
    {
        self.filter = FilterStrategy::custom(f);
        self
    }

    pub fn with_shortcuts(mut self, shortcuts: Vec<ShortcutBinding>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn with_highlight_query(mut self, highlight_query: bool) -> Self {
        self.highlight_query = highlight_query;
        self
    }

    pub fn with_close_on_trigger(mut self, close_on_trigger: bool) -> Self {
        self.close_on_trigger = close_on_trigger;
        self
    }

    pub fn with_focus_delay(mut self, focus_delay: Duration) -> Self {
        self.focus_delay = focus_delay;
        self
    }

    /// Limit of the built-in filter, or `None` when a custom filter is set
    pub fn limit(&self) -> Option<usize> {
        match self.filter {
            FilterStrategy::Default { limit } => Some(limit),
            FilterStrategy::Custom(_) => None,
        }
    }
}

/// Events for the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotlightEvent {
    OpenChanged(bool),
    /// Schedule a `SpotlightMsg::FocusInput` after this delay
    RequestFocus { after: Duration },
    /// Bring the row at this flattened index into view (nearest alignment)
    ScrollIntoView { index: usize },
    /// An action's trigger ran
    Triggered { id: String },
}

/// The search-overlay engine
///
/// Actions are borrowed on every call and never stored, so callers can build
/// a fresh list for each render.
#[derive(Debug, Clone, Default)]
pub struct Spotlight {
    state: SpotlightState,
    options: SpotlightOptions,
}

impl Spotlight {
    pub fn new(options: SpotlightOptions) -> Self {
        Self {
            state: SpotlightState::default(),
            options,
        }
    }

    pub fn state(&self) -> &SpotlightState {
        &self.state
    }

    pub fn options(&self) -> &SpotlightOptions {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn shortcut_manager(&self) -> ShortcutManager {
        ShortcutManager::new(self.options.shortcuts.clone())
    }

    /// Derived output for the current render
    pub fn view<'a>(&'a self, actions: &'a [SpotlightAction]) -> SpotlightView<'a> {
        SpotlightView::build(actions, &self.state.query, self.state.active_index(), &self.options)
    }

    /// Register the global shortcut listener for as long as the overlay is mounted
    ///
    /// Call once per mounted overlay and keep the subscription alongside it.
    pub fn listen(&self, listeners: &KeyListeners<SpotlightMsg>) -> Subscription {
        let manager = self.shortcut_manager();
        listeners.subscribe(move |input: &KeyInput| manager.handle(input))
    }

    /// Run a message through the lifecycle and perform its effects
    ///
    /// Triggers run here, synchronously and exactly once per selection.
    pub fn dispatch(&mut self, msg: SpotlightMsg, actions: &[SpotlightAction]) -> Vec<SpotlightEvent> {
        let query = self.state.query.clone();
        let view = SpotlightView::build(actions, &query, self.state.active_index(), &self.options);

        let mut current = self.state.clone();
        current.navigation.clamp(view.len());
        let (next, effects) = reduce(current, &msg, &view, &self.options);
        self.state = next;

        effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::OpenChanged(open) => Some(SpotlightEvent::OpenChanged(open)),
                Effect::RequestFocus { after } => Some(SpotlightEvent::RequestFocus { after }),
                Effect::ScrollIntoView(scroll) => Some(SpotlightEvent::ScrollIntoView {
                    index: scroll.index,
                }),
                Effect::Trigger { index } => view.get(index).map(|action| {
                    action.on_trigger.call();
                    SpotlightEvent::Triggered {
                        id: action.id.clone(),
                    }
                }),
            })
            .collect()
    }

    pub fn open(&mut self, actions: &[SpotlightAction]) -> Vec<SpotlightEvent> {
        self.dispatch(SpotlightMsg::SetOpen(true), actions)
    }

    pub fn close(&mut self, actions: &[SpotlightAction]) -> Vec<SpotlightEvent> {
        self.dispatch(SpotlightMsg::Close(CloseReason::External), actions)
    }

    pub fn toggle(&mut self, actions: &[SpotlightAction]) -> Vec<SpotlightEvent> {
        self.dispatch(SpotlightMsg::Toggle, actions)
    }

    pub fn set_query(&mut self, query: impl Into<String>, actions: &[SpotlightAction]) -> Vec<SpotlightEvent> {
        self.dispatch(SpotlightMsg::SetQuery(query.into()), actions)
    }

    /// Fire an action by id without going through the overlay
    ///
    /// Searches the whole list, not just the visible results. Disabled and
    /// unknown ids do nothing. The open state is left alone.
    pub fn trigger(&self, id: &str, actions: &[SpotlightAction]) -> bool {
        match actions.iter().find(|a| a.id == id) {
            Some(action) if !action.disabled => {
                log::debug!("triggering action {} by id", id);
                action.on_trigger.call();
                true
            }
            Some(_) => {
                log::debug!("ignoring trigger of disabled action {}", id);
                false
            }
            None => {
                log::debug!("no action with id {}", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded_actions(log: &Rc<RefCell<Vec<&'static str>>>) -> Vec<SpotlightAction> {
        let entries: [(&'static str, &'static str, bool); 3] = [
            ("a", "Open File", false),
            ("b", "Close File", true),
            ("c", "Open Settings", false),
        ];
        entries
            .into_iter()
            .map(|(id, label, disabled)| {
                let log = log.clone();
                SpotlightAction::new(id, label)
                    .disabled(disabled)
                    .on_trigger(move || log.borrow_mut().push(id))
            })
            .collect()
    }

    #[test]
    fn test_dispatch_runs_trigger_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let actions = recorded_actions(&log);
        let mut spotlight = Spotlight::default();

        spotlight.open(&actions);
        spotlight.set_query("settings", &actions);
        let events = spotlight.dispatch(SpotlightMsg::Execute, &actions);

        assert_eq!(*log.borrow(), vec!["c"]);
        assert_eq!(
            events,
            vec![
                SpotlightEvent::Triggered { id: "c".into() },
                SpotlightEvent::OpenChanged(false),
            ]
        );
        assert!(!spotlight.is_open());
    }

    #[test]
    fn test_dispatch_clamps_when_actions_shrink() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let actions = recorded_actions(&log);
        let mut spotlight = Spotlight::default();
        spotlight.open(&actions);
        spotlight.dispatch(SpotlightMsg::Next, &actions);
        spotlight.dispatch(SpotlightMsg::Next, &actions);
        assert_eq!(spotlight.active_index(), 2);

        // The caller renders with a shorter list; Enter hits the last row
        let fewer = &actions[..1];
        spotlight.dispatch(SpotlightMsg::Execute, fewer);
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn test_listen_is_scoped_to_subscription() {
        let listeners = KeyListeners::new();
        let spotlight = Spotlight::default();

        let subscription = spotlight.listen(&listeners);
        assert_eq!(listeners.dispatch(&KeyInput::ctrl('k')), vec![SpotlightMsg::Toggle]);

        drop(subscription);
        assert!(listeners.dispatch(&KeyInput::ctrl('k')).is_empty());
    }

    #[test]
    fn test_trigger_by_id() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let actions = recorded_actions(&log);
        let spotlight = Spotlight::default();

        assert!(spotlight.trigger("a", &actions));
        assert!(!spotlight.trigger("b", &actions));
        assert!(!spotlight.trigger("missing", &actions));
        assert_eq!(*log.borrow(), vec!["a"]);
        assert!(!spotlight.is_open());
    }

    #[test]
    fn test_options_builders() {
        let options = SpotlightOptions::default().with_limit(3);
        assert_eq!(options.limit(), Some(3));

        let options = options.with_custom_filter(|_, actions| actions.iter().collect());
        assert_eq!(options.limit(), None);

        let options = options.with_shortcuts(Vec::new());
        assert!(Spotlight::new(options).shortcut_manager().bindings().is_empty());
    }
}
