//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

use crate::models::{SearchEngine, Shortcut};

/// File holding the serialized application state, inside the data dir
pub const STATE_FILE: &str = "state.json";

/// File holding the last successful weather fetch, inside the data dir
pub const WEATHER_CACHE_FILE: &str = "weather.json";

/// Open-Meteo current-weather endpoint (no authentication)
pub const WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

// Fixed coordinate for the weather readout (Surabaya)
pub const WEATHER_LATITUDE: f64 = -7.25;
pub const WEATHER_LONGITUDE: f64 = 112.75;

/// Cached weather younger than this is served without a network fetch
pub const WEATHER_CACHE_TTL_SECS: u64 = 30 * 60;

/// Interval between periodic weather refresh attempts
pub const WEATHER_REFRESH_SECS: u64 = 30 * 60;

/// Display name used before the user picks one
pub const DEFAULT_USER_NAME: &str = "Traveler";

// Theme fallbacks when no override is set (Rose Pine Moon)
pub const DEFAULT_THEME_BASE: &str = "#232136";
pub const DEFAULT_THEME_ACCENT: &str = "#c4a7e7";

/// The seven built-in search engines. Google is the configured default;
/// YouTube, GitHub, Reddit, and Wikipedia carry bang aliases.
pub fn default_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine {
            id: "google".into(),
            label: "Google".into(),
            url: "https://www.google.com/search?q=".into(),
            is_default: true,
            bang: None,
        },
        SearchEngine {
            id: "youtube".into(),
            label: "YouTube".into(),
            url: "https://www.youtube.com/results?search_query=".into(),
            is_default: false,
            bang: Some("yt".into()),
        },
        SearchEngine {
            id: "ddg".into(),
            label: "DuckDuckGo".into(),
            url: "https://duckduckgo.com/?q=".into(),
            is_default: false,
            bang: None,
        },
        SearchEngine {
            id: "brave".into(),
            label: "Brave".into(),
            url: "https://search.brave.com/search?q=".into(),
            is_default: false,
            bang: None,
        },
        SearchEngine {
            id: "github".into(),
            label: "GitHub".into(),
            url: "https://github.com/search?q=".into(),
            is_default: false,
            bang: Some("gh".into()),
        },
        SearchEngine {
            id: "reddit".into(),
            label: "Reddit".into(),
            url: "https://www.reddit.com/search/?q=".into(),
            is_default: false,
            bang: Some("r".into()),
        },
        SearchEngine {
            id: "wiki".into(),
            label: "Wikipedia".into(),
            url: "https://en.wikipedia.org/wiki/Special:Search?search=".into(),
            is_default: false,
            bang: Some("w".into()),
        },
    ]
}

/// The four built-in shortcut tiles shown before the user adds their own.
pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut {
            id: "1".into(),
            title: "GitHub".into(),
            url: "https://github.com".into(),
            icon: "🐙".into(),
        },
        Shortcut {
            id: "2".into(),
            title: "YouTube".into(),
            url: "https://youtube.com".into(),
            icon: "📺".into(),
        },
        Shortcut {
            id: "3".into(),
            title: "Reddit".into(),
            url: "https://reddit.com".into(),
            icon: "👽".into(),
        },
        Shortcut {
            id: "4".into(),
            title: "Twitter".into(),
            url: "https://twitter.com".into(),
            icon: "🐦".into(),
        },
    ]
}
