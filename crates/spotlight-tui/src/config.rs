use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use spotlight_engine::{DEFAULT_LIMIT, ShortcutBinding, SpotlightOptions};

use crate::state::Page;

/// Application configuration loaded from spotlight.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Global toggle combos, e.g. `["mod+k"]`; empty disables the toggle
    #[serde(default = "default_shortcuts")]
    pub shortcuts: Vec<ShortcutBinding>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_true")]
    pub highlight_query: bool,
    #[serde(default = "default_true")]
    pub close_on_trigger: bool,
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
    /// Extra spotlight entries
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

/// A spotlight entry declared in the config file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Right-aligned hint, e.g. a key or a count
    #[serde(default)]
    pub right_section: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// What the entry does: `page:<name>`, `theme:toggle`, `console:toggle` or `quit`
    pub command: String,
}

/// Commands config entries can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Page(Page),
    ToggleTheme,
    ToggleConsole,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "theme:toggle" => Ok(Command::ToggleTheme),
            "console:toggle" => Ok(Command::ToggleConsole),
            "quit" => Ok(Command::Quit),
            other => {
                let slug = other
                    .strip_prefix("page:")
                    .ok_or_else(|| anyhow!("unknown command `{}`", other))?;
                Page::from_slug(slug)
                    .map(Command::Page)
                    .ok_or_else(|| anyhow!("unknown page `{}`", slug))
            }
        }
    }
}

fn default_shortcuts() -> Vec<ShortcutBinding> {
    vec![ShortcutBinding::default()] // mod+k
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_focus_delay_ms() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shortcuts: default_shortcuts(),
            limit: default_limit(),
            highlight_query: true,
            close_on_trigger: true,
            focus_delay_ms: default_focus_delay_ms(),
            actions: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "spotlight.toml";

        // Try current directory first
        if let Some(config) = Self::load_from(PathBuf::from(CONFIG_FILE)) {
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Some(config) = Self::load_from(home_config) {
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    fn load_from(path: PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(err) => {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                None
            }
        }
    }

    pub fn spotlight_options(&self) -> SpotlightOptions {
        SpotlightOptions::default()
            .with_limit(self.limit)
            .with_shortcuts(self.shortcuts.clone())
            .with_highlight_query(self.highlight_query)
            .with_close_on_trigger(self.close_on_trigger)
            .with_focus_delay(Duration::from_millis(self.focus_delay_ms))
    }

    /// Human-readable toggle hint, e.g. "Mod+K"
    pub fn shortcut_hint(&self) -> String {
        match self.shortcuts.first() {
            Some(binding) => binding.to_string(),
            None => "disabled".to_string(),
        }
    }
}
