//! Action records and the provider registry that assembles them

use std::fmt::{self, Debug};
use std::rc::Rc;

/// Callback handle attached to an action
///
/// Cloning shares the same callback. The engine calls it at most once per
/// successful selection.
#[derive(Clone)]
pub struct Trigger(Rc<dyn Fn()>);

impl Trigger {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A trigger that does nothing (useful for placeholders and tests)
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::noop()
    }
}

impl Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Trigger")
    }
}

/// A single selectable entry in the spotlight
#[derive(Debug, Clone, Default)]
pub struct SpotlightAction {
    /// Stable list key (e.g., "open-file"). Never matched against.
    pub id: String,

    /// Primary text (e.g., "Open File")
    pub label: String,

    /// Secondary text shown under the label
    pub description: Option<String>,

    /// Extra search terms that are not displayed
    pub keywords: Vec<String>,

    /// Group heading. `None` joins the implicit `""` group.
    pub group: Option<String>,

    /// Opaque render payload shown before the label
    pub icon: Option<String>,

    /// Opaque render payload shown at the end of the row (e.g., "Ctrl+O")
    pub right_section: Option<String>,

    /// Disabled actions are listed and navigable but never fire
    pub disabled: bool,

    pub on_trigger: Trigger,

    /// Nested actions. Carried for callers, not traversed by the engine.
    pub children: Vec<SpotlightAction>,
}

impl SpotlightAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn right_section(mut self, right_section: impl Into<String>) -> Self {
        self.right_section = Some(right_section.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_trigger(mut self, f: impl Fn() + 'static) -> Self {
        self.on_trigger = Trigger::new(f);
        self
    }

    /// Group key used for bucketing; ungrouped actions share `""`
    pub fn group_key(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }
}

/// Trait for supplying actions to the spotlight
///
/// Generic over `S`, the caller's state, so providers can decide per render
/// which actions exist and which are disabled.
pub trait ActionProvider<S>: Debug {
    fn actions(&self, state: &S) -> Vec<SpotlightAction>;

    /// Provider name for debugging
    fn name(&self) -> &str;
}

/// Registry of action providers
///
/// Collects actions from every provider into the list handed to the engine
/// for one render. Providers are queried in registration order.
pub struct ActionRegistry<S> {
    providers: Vec<Box<dyn ActionProvider<S>>>,
}

impl<S> ActionRegistry<S> {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn register(&mut self, provider: Box<dyn ActionProvider<S>>) {
        log::trace!("registering action provider {}", provider.name());
        self.providers.push(provider);
    }

    /// Build the action list for the current state
    pub fn collect(&self, state: &S) -> Vec<SpotlightAction> {
        self.providers
            .iter()
            .flat_map(|p| p.actions(state))
            .collect()
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

impl<S> Default for ActionRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Debug for ActionRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("provider_count", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug)]
    struct TestState {
        can_save: bool,
    }

    #[derive(Debug)]
    struct FileProvider;

    impl ActionProvider<TestState> for FileProvider {
        fn actions(&self, state: &TestState) -> Vec<SpotlightAction> {
            vec![
                SpotlightAction::new("open", "Open File").group("File"),
                SpotlightAction::new("save", "Save File")
                    .group("File")
                    .disabled(!state.can_save),
            ]
        }

        fn name(&self) -> &str {
            "FileProvider"
        }
    }

    #[derive(Debug)]
    struct QuitProvider;

    impl ActionProvider<TestState> for QuitProvider {
        fn actions(&self, _state: &TestState) -> Vec<SpotlightAction> {
            vec![SpotlightAction::new("quit", "Quit")]
        }

        fn name(&self) -> &str {
            "QuitProvider"
        }
    }

    #[test]
    fn test_registry_basic() {
        let mut registry = ActionRegistry::new();
        assert_eq!(registry.provider_count(), 0);

        registry.register(Box::new(FileProvider));
        assert_eq!(registry.provider_count(), 1);
    }

    #[test]
    fn test_collect_keeps_registration_order() {
        let mut registry = ActionRegistry::new();
        registry.register(Box::new(QuitProvider));
        registry.register(Box::new(FileProvider));

        let actions = registry.collect(&TestState { can_save: true });
        let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["quit", "open", "save"]);
    }

    #[test]
    fn test_state_aware_disabling() {
        let mut registry = ActionRegistry::new();
        registry.register(Box::new(FileProvider));

        let actions = registry.collect(&TestState { can_save: false });
        assert!(actions[1].disabled);

        let actions = registry.collect(&TestState { can_save: true });
        assert!(!actions[1].disabled);
    }

    #[test]
    fn test_group_key_defaults_to_empty() {
        assert_eq!(SpotlightAction::new("a", "A").group_key(), "");
        assert_eq!(SpotlightAction::new("a", "A").group("Nav").group_key(), "Nav");
    }

    #[test]
    fn test_trigger_clone_shares_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let action = SpotlightAction::new("a", "A").on_trigger(move || counter.set(counter.get() + 1));

        let copy = action.clone();
        action.on_trigger.call();
        copy.on_trigger.call();
        assert_eq!(calls.get(), 2);
    }
}
