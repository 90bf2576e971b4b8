//! Search-overlay engine for "jump to anything" command palettes
//!
//! This crate holds the logic behind a spotlight overlay, with no rendering:
//! - Case-insensitive substring filtering, order preserving, with a result limit
//! - Caller-supplied filter strategies that replace the built-in pipeline
//! - First-seen grouping and a flattened selection index
//! - Clamped keyboard/pointer navigation
//! - A global toggle shortcut and an open/close lifecycle that fires triggers
//! - First-match highlighting for rendered labels and descriptions
//!
//! # Example
//!
//! ```rust
//! use spotlight_engine::{Spotlight, SpotlightAction, SpotlightMsg};
//!
//! let actions = vec![
//!     SpotlightAction::new("open", "Open File").group("File"),
//!     SpotlightAction::new("close", "Close File").group("File"),
//!     SpotlightAction::new("settings", "Open Settings"),
//! ];
//!
//! let mut spotlight = Spotlight::default();
//! spotlight.toggle(&actions);
//! spotlight.set_query("open", &actions);
//!
//! let view = spotlight.view(&actions);
//! let ids: Vec<&str> = view.flattened.iter().map(|a| a.id.as_str()).collect();
//! assert_eq!(ids, vec!["open", "settings"]);
//!
//! spotlight.dispatch(SpotlightMsg::Execute, &actions);
//! assert!(!spotlight.is_open());
//! ```

mod action;
mod filter;
mod group;
mod highlight;
mod listener;
mod matcher;
mod navigation;
mod overlay;
mod shortcut;
mod spotlight;
mod view;

pub use action::{ActionProvider, ActionRegistry, SpotlightAction, Trigger};
pub use filter::{filter_actions, CustomFilter, FilterStrategy, DEFAULT_LIMIT};
pub use group::{flatten, group_actions, ActionGroup};
pub use highlight::{highlight, Highlight};
pub use listener::{KeyListeners, ListenerId, Subscription};
pub use matcher::{contains_ignore_case, find_ignore_case, matches};
pub use navigation::{Navigation, ScrollIntoView};
pub use overlay::{navigation_msg, reduce, CloseReason, Effect, SpotlightMsg, SpotlightState};
pub use shortcut::{Key, KeyInput, Modifiers, ShortcutBinding, ShortcutManager, ShortcutParseError};
pub use spotlight::{Spotlight, SpotlightEvent, SpotlightOptions, DEFAULT_FOCUS_DELAY};
pub use view::{SpotlightView, ViewItem};
