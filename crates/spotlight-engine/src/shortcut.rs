//! Global shortcut bindings and key-event interpretation
//!
//! Hosts translate their native key events into [`KeyInput`]. The
//! [`ShortcutManager`] only cares about two things: the configured toggle
//! combos and Escape. Every other key is left for the host to forward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overlay::{CloseReason, SpotlightMsg};

/// Keys the engine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Backspace,
    Other,
}

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    pub fn ctrl_or_meta(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A terminal- and toolkit-independent key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key pressed without modifiers
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(
            Key::Char(c),
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        )
    }

    pub fn meta(c: char) -> Self {
        Self::new(
            Key::Char(c),
            Modifiers {
                meta: true,
                ..Modifiers::NONE
            },
        )
    }
}

/// Errors from parsing a shortcut string such as `"mod+k"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutParseError {
    #[error("shortcut is empty")]
    Empty,
    #[error("unsupported modifier `{0}` (expected mod, ctrl, cmd or meta)")]
    UnsupportedModifier(String),
    #[error("shortcut key `{0}` must be a single character")]
    InvalidKey(String),
}

/// A single-character key plus an optional "Meta or Ctrl" requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortcutBinding {
    pub key: char,
    pub requires_modifier: bool,
}

impl ShortcutBinding {
    pub fn new(key: char, requires_modifier: bool) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            requires_modifier,
        }
    }

    /// Case-insensitive on the key, so Shift does not break the combo
    pub fn matches(&self, input: &KeyInput) -> bool {
        let Key::Char(c) = input.key else {
            return false;
        };
        if !c.eq_ignore_ascii_case(&self.key) {
            return false;
        }
        !self.requires_modifier || input.modifiers.ctrl_or_meta()
    }
}

impl Default for ShortcutBinding {
    /// `mod+k`
    fn default() -> Self {
        Self::new('k', true)
    }
}

impl fmt::Display for ShortcutBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.to_ascii_uppercase();
        if self.requires_modifier {
            write!(f, "Mod+{key}")
        } else {
            write!(f, "{key}")
        }
    }
}

impl FromStr for ShortcutBinding {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        // "+" on its own (or as the final key, as in "mod++") is a valid key
        let (modifiers, key) = match s.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None if s == "+" => ("", s),
            None => s.rsplit_once('+').unwrap_or(("", s)),
        };

        let mut requires_modifier = false;
        for modifier in modifiers.split('+').map(str::trim).filter(|m| !m.is_empty()) {
            match modifier.to_ascii_lowercase().as_str() {
                "mod" | "ctrl" | "control" | "cmd" | "command" | "meta" | "super" => {
                    requires_modifier = true;
                }
                _ => return Err(ShortcutParseError::UnsupportedModifier(modifier.to_string())),
            }
        }

        let key = key.trim();
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::new(c, requires_modifier)),
            (None, _) => Err(ShortcutParseError::Empty),
            _ => Err(ShortcutParseError::InvalidKey(key.to_string())),
        }
    }
}

impl TryFrom<String> for ShortcutBinding {
    type Error = ShortcutParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShortcutBinding> for String {
    fn from(binding: ShortcutBinding) -> Self {
        binding.to_string()
    }
}

/// Maps key presses to open/close messages
///
/// With no bindings the toggle is disabled; Escape still closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutManager {
    bindings: Vec<ShortcutBinding>,
}

impl ShortcutManager {
    pub fn new(bindings: Vec<ShortcutBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    pub fn handle(&self, input: &KeyInput) -> Option<SpotlightMsg> {
        if self.bindings.iter().any(|b| b.matches(input)) {
            return Some(SpotlightMsg::Toggle);
        }
        if input.key == Key::Escape {
            return Some(SpotlightMsg::Close(CloseReason::Escape));
        }
        None
    }
}
