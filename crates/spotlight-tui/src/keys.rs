use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spotlight_engine::{Key, KeyInput, Modifiers, SpotlightMsg, navigation_msg};

use crate::{actions::Action, state::Page};

/// Shortcut key definition with key matching capability
#[derive(Clone)]
pub struct Shortcut {
    /// Stable id when listed in the spotlight
    pub id: &'static str,
    pub key_display: &'static str,
    pub description: &'static str,
    pub action: Action,
    pub matcher: fn(&KeyEvent) -> bool,
}

/// Category of shortcuts
#[derive(Debug, Clone)]
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

impl std::fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortcut")
            .field("id", &self.id)
            .field("key_display", &self.key_display)
            .field("description", &self.description)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

impl Shortcut {
    pub fn matches(&self, key: &KeyEvent) -> bool {
        (self.matcher)(key)
    }
}

fn plain(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// App-level shortcuts, active while the spotlight is closed
///
/// Page jumps (1-5) are handled separately since one matcher covers them all.
pub fn get_shortcuts() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "General",
            shortcuts: vec![
                Shortcut {
                    id: "theme-toggle",
                    key_display: "t",
                    description: "Toggle light/dark theme",
                    action: Action::ToggleTheme,
                    matcher: |key| matches!(key.code, KeyCode::Char('t')) && plain(key),
                },
                Shortcut {
                    id: "quit",
                    key_display: "q / Ctrl+C",
                    description: "Quit",
                    action: Action::Quit,
                    matcher: |key| {
                        (matches!(key.code, KeyCode::Char('q')) && plain(key))
                            || (matches!(key.code, KeyCode::Char('c'))
                                && key.modifiers.contains(KeyModifiers::CONTROL))
                    },
                },
            ],
        },
        ShortcutCategory {
            name: "Debug",
            shortcuts: vec![Shortcut {
                id: "console-toggle",
                key_display: "` or ~",
                description: "Toggle debug console",
                action: Action::ToggleDebugConsole,
                matcher: |key| matches!(key.code, KeyCode::Char('`') | KeyCode::Char('~')),
            }],
        },
    ]
}

pub fn get_all_shortcuts_flat() -> Vec<Shortcut> {
    get_shortcuts()
        .into_iter()
        .flat_map(|category| category.shortcuts)
        .collect()
}

/// Translate a crossterm key event into the engine's key model
pub fn to_key_input(key: &KeyEvent) -> KeyInput {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    };

    KeyInput::new(
        code,
        Modifiers {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            meta: key
                .modifiers
                .intersects(KeyModifiers::SUPER | KeyModifiers::META),
            alt: key.modifiers.contains(KeyModifiers::ALT),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        },
    )
}

/// Keys while the spotlight is open: navigation plus editing the query
///
/// Toggle and Escape never get here; the global listeners take them first.
pub fn spotlight_key_action(key: &KeyEvent, query: &str) -> Action {
    if let Some(msg) = navigation_msg(&to_key_input(key)) {
        return Action::Spotlight(msg);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Backspace if !query.is_empty() => {
            let mut query = query.to_string();
            query.pop();
            Action::Spotlight(SpotlightMsg::SetQuery(query))
        }
        KeyCode::Char('u') if ctrl => Action::Spotlight(SpotlightMsg::SetQuery(String::new())),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Action::Spotlight(SpotlightMsg::SetQuery(format!("{}{}", query, c)))
        }
        _ => Action::None,
    }
}

/// Keys while the spotlight is closed
pub fn app_key_action(key: &KeyEvent, debug_console_open: bool) -> Action {
    // Handle debug console keys if console is open (before general shortcuts)
    if debug_console_open {
        match key.code {
            KeyCode::Esc => return Action::ToggleDebugConsole,
            KeyCode::Char('j') | KeyCode::Down => return Action::ScrollDebugConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => return Action::ScrollDebugConsoleUp,
            KeyCode::Char('a') => return Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') if plain(key) => return Action::ClearDebugLogs,
            _ => {}
        }
    }

    if let KeyCode::Char(c @ '1'..='5') = key.code {
        let index = c as usize - '1' as usize;
        return Page::ALL
            .get(index)
            .map(|page| Action::NavigateTo(*page))
            .unwrap_or(Action::None);
    }

    get_all_shortcuts_flat()
        .into_iter()
        .find(|shortcut| shortcut.matches(key))
        .map(|shortcut| shortcut.action)
        .unwrap_or(Action::None)
}
