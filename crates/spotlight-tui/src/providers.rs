//! Spotlight action providers for the catalogue app
//!
//! Each provider turns part of the application into spotlight entries whose
//! triggers send an [`Action`] back through the main loop's channel.

use spotlight_engine::{ActionProvider, ActionRegistry, SpotlightAction};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    actions::Action,
    config::{ActionConfig, Command, Config},
    keys::get_shortcuts,
    state::{AppState, Page},
};

/// Build an `on_trigger` callback that forwards `action` to the main loop
fn send(tx: &UnboundedSender<Action>, action: Action) -> impl Fn() + 'static {
    let tx = tx.clone();
    move || {
        if tx.send(action.clone()).is_err() {
            log::warn!("Action channel closed, dropping {:?}", action);
        }
    }
}

/// One entry per catalogue page; the current page is listed but disabled
#[derive(Debug)]
pub struct PageProvider {
    tx: UnboundedSender<Action>,
}

impl PageProvider {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self { tx }
    }
}

impl ActionProvider<AppState> for PageProvider {
    fn actions(&self, state: &AppState) -> Vec<SpotlightAction> {
        Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| {
                SpotlightAction::new(format!("page:{}", page.slug()), page.title())
                    .description(page.description())
                    .keywords(page.keywords().iter().copied())
                    .group("Pages")
                    .icon("#")
                    .right_section((i + 1).to_string())
                    .disabled(state.ui.page == *page)
                    .on_trigger(send(&self.tx, Action::NavigateTo(*page)))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Pages"
    }
}

/// Exposes the app keyboard shortcuts as spotlight entries
#[derive(Debug)]
pub struct GeneralProvider {
    tx: UnboundedSender<Action>,
}

impl GeneralProvider {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self { tx }
    }
}

impl ActionProvider<AppState> for GeneralProvider {
    fn actions(&self, state: &AppState) -> Vec<SpotlightAction> {
        let theme_hint = match state.theme.mode {
            crate::theme::ThemeMode::Dark => "Currently dark",
            crate::theme::ThemeMode::Light => "Currently light",
        };

        get_shortcuts()
            .into_iter()
            .flat_map(|category| {
                category.shortcuts.into_iter().map(move |shortcut| {
                    let mut action = SpotlightAction::new(shortcut.id, shortcut.description)
                        .group(category.name)
                        .right_section(shortcut.key_display)
                        .on_trigger(send(&self.tx, shortcut.action.clone()));
                    if shortcut.id == "theme-toggle" {
                        action = action.description(theme_hint).keywords(["dark", "light", "colors"]);
                    }
                    action
                })
            })
            .collect()
    }

    fn name(&self) -> &str {
        "General"
    }
}

/// User-defined entries from the `[[actions]]` tables of the config file
#[derive(Debug)]
pub struct ConfigProvider {
    tx: UnboundedSender<Action>,
    entries: Vec<(ActionConfig, Action)>,
}

impl ConfigProvider {
    /// Entries with a command that does not parse are skipped with a warning
    pub fn new(tx: UnboundedSender<Action>, config: &Config) -> Self {
        let entries = config
            .actions
            .iter()
            .filter_map(|entry| match entry.command.parse::<Command>() {
                Ok(command) => Some((entry.clone(), command_action(command))),
                Err(err) => {
                    log::warn!("Skipping config action `{}`: {}", entry.id, err);
                    None
                }
            })
            .collect();

        Self { tx, entries }
    }
}

fn command_action(command: Command) -> Action {
    match command {
        Command::Page(page) => Action::NavigateTo(page),
        Command::ToggleTheme => Action::ToggleTheme,
        Command::ToggleConsole => Action::ToggleDebugConsole,
        Command::Quit => Action::Quit,
    }
}

impl ActionProvider<AppState> for ConfigProvider {
    fn actions(&self, _state: &AppState) -> Vec<SpotlightAction> {
        self.entries
            .iter()
            .map(|(entry, action)| {
                let mut spotlight_action = SpotlightAction::new(&entry.id, &entry.label)
                    .keywords(entry.keywords.iter().cloned())
                    .disabled(entry.disabled)
                    .on_trigger(send(&self.tx, action.clone()));
                spotlight_action.description = entry.description.clone();
                spotlight_action.group = entry.group.clone();
                spotlight_action.icon = entry.icon.clone();
                spotlight_action.right_section = entry.right_section.clone();
                spotlight_action
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Config"
    }
}

/// Registry with every provider the app ships
pub fn build_registry(tx: &UnboundedSender<Action>, config: &Config) -> ActionRegistry<AppState> {
    let mut registry = ActionRegistry::new();
    registry.register(Box::new(PageProvider::new(tx.clone())));
    registry.register(Box::new(GeneralProvider::new(tx.clone())));
    registry.register(Box::new(ConfigProvider::new(tx.clone(), config)));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_page_provider_disables_current_page() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = AppState::default();

        let actions = PageProvider::new(tx).actions(&state);
        assert_eq!(actions.len(), Page::ALL.len());
        assert!(actions[0].disabled);
        assert!(actions[1..].iter().all(|a| !a.disabled));
        assert!(actions.iter().all(|a| a.group.as_deref() == Some("Pages")));
    }

    #[test]
    fn test_trigger_sends_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let state = AppState::default();

        let actions = PageProvider::new(tx).actions(&state);
        let docs = actions.iter().find(|a| a.id == "page:docs").unwrap();
        docs.on_trigger.call();

        assert!(matches!(rx.try_recv(), Ok(Action::NavigateTo(Page::Docs))));
    }

    #[test]
    fn test_general_provider_lists_shortcuts() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let actions = GeneralProvider::new(tx).actions(&AppState::default());

        let quit = actions.iter().find(|a| a.id == "quit").unwrap();
        assert_eq!(quit.right_section.as_deref(), Some("q / Ctrl+C"));
        quit.on_trigger.call();
        assert!(matches!(rx.try_recv(), Ok(Action::Quit)));
    }

    #[test]
    fn test_config_provider_skips_invalid_commands() {
        let config: Config = toml::from_str(
            r#"
            [[actions]]
            id = "buttons"
            label = "Jump to buttons"
            icon = ">"
            right_section = "F2"
            command = "page:buttons"

            [[actions]]
            id = "broken"
            label = "Launch rockets"
            command = "rockets:launch"
            "#,
        )
        .unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let actions = ConfigProvider::new(tx, &config).actions(&AppState::default());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].id, "buttons");
        assert_eq!(actions[0].group, None);
        assert_eq!(actions[0].icon.as_deref(), Some(">"));
        assert_eq!(actions[0].right_section.as_deref(), Some("F2"));

        actions[0].on_trigger.call();
        assert!(matches!(rx.try_recv(), Ok(Action::NavigateTo(Page::Buttons))));
    }

    #[test]
    fn test_registry_collects_all_providers() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let registry = build_registry(&tx, &Config::default());
        assert_eq!(registry.provider_count(), 3);

        let actions = registry.collect(&AppState::default());
        assert!(actions.iter().any(|a| a.id == "page:home"));
        assert!(actions.iter().any(|a| a.id == "console-toggle"));
    }
}
