//! Core data model: the persisted application state and its pieces.

use serde::{Deserialize, Serialize};

use crate::constants::{default_engines, default_shortcuts, DEFAULT_USER_NAME};

/// A user-defined bookmark tile on the start page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Short decoration, usually an emoji; empty means "use the placeholder"
    pub icon: String,
}

/// Payload for creating a shortcut; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortcut {
    pub title: String,
    pub url: String,
    pub icon: String,
}

/// Partial update for an existing shortcut. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

/// A configured search destination. Appending a URL-encoded query to `url`
/// yields a valid search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    pub id: String,
    pub label: String,
    pub url: String,
    pub is_default: bool,
    /// Optional shorthand alias, typed as `!<bang>` in the search bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bang: Option<String>,
}

/// Theme color overrides. An absent field means "use the built-in theme".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

/// Partial theme update. The outer `None` leaves a field unchanged;
/// `Some(None)` clears it back to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub base: Option<Option<String>>,
    pub accent: Option<Option<String>>,
}

impl ThemePatch {
    pub fn clear_all() -> Self {
        Self {
            base: Some(None),
            accent: Some(None),
        }
    }
}

/// The closed set of preference mutations the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceUpdate {
    Use24h(bool),
    ShowSeconds(bool),
    ShowWeather(bool),
    ShowGreeting(bool),
    UserName(String),
}

/// One-way discovery latches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Onboarding {
    #[serde(default)]
    pub has_seen_bang_hint: bool,
}

/// Root aggregate for everything the user can configure. Owned exclusively
/// by the [`StateStore`](crate::store::StateStore); the rest of the app only
/// observes read snapshots or calls mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub use_24h: bool,
    pub show_weather: bool,
    pub show_seconds: bool,
    pub show_greeting: bool,
    pub user_name: String,
    pub shortcuts: Vec<Shortcut>,
    pub search_engines: Vec<SearchEngine>,
    #[serde(default)]
    pub theme: ThemeColors,
    #[serde(default)]
    pub onboarding: Onboarding,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            use_24h: true,
            show_weather: false,
            show_seconds: false,
            show_greeting: true,
            user_name: DEFAULT_USER_NAME.to_string(),
            shortcuts: default_shortcuts(),
            search_engines: default_engines(),
            theme: ThemeColors::default(),
            onboarding: Onboarding::default(),
        }
    }
}
