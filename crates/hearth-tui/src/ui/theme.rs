//! Centralized theme: Rose Pine Moon palette plus user color overrides.
//!
//! The store's `ThemeColors` can override the background and accent; every
//! other color is fixed here.

use hearth_core::models::ThemeColors;
use ratatui::style::Color;

/// App background (Rose Pine Moon base)
pub const BG_BASE: Color = Color::Rgb(0x23, 0x21, 0x36);

/// Card background - subtle lift from the base
pub const BG_SURFACE: Color = Color::Rgb(0x2a, 0x27, 0x3f);

/// Selected tile background
pub const BG_SELECTED: Color = Color::Rgb(0x39, 0x35, 0x52);

/// Primary text
pub const TEXT_PRIMARY: Color = Color::Rgb(0xe0, 0xde, 0xf4);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(0x6e, 0x6a, 0x86);

/// Interactive accent (Rose Pine Moon iris)
pub const ACCENT: Color = Color::Rgb(0xc4, 0xa7, 0xe7);

/// Warnings and stale indicators (gold)
pub const ACCENT_WARNING: Color = Color::Rgb(0xf6, 0xc1, 0x77);

/// Errors and destructive hints (love)
pub const ACCENT_ERROR: Color = Color::Rgb(0xeb, 0x6f, 0x92);

/// Positive indicators (foam)
pub const ACCENT_OK: Color = Color::Rgb(0x9c, 0xcf, 0xd8);

/// Effective colors after applying the user's overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub base: Color,
    pub accent: Color,
}

impl Theme {
    pub fn from_overrides(colors: &ThemeColors) -> Self {
        Self {
            base: colors
                .base
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(BG_BASE),
            accent: colors
                .accent
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(ACCENT),
        }
    }
}

/// Parse a `#rrggbb` string into a terminal color. Returns `None` for
/// anything that is not exactly that shape.
pub fn parse_hex_color(input: &str) -> Option<Color> {
    let hex = input.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lower_and_upper_hex() {
        assert_eq!(parse_hex_color("#1a2b3c"), Some(Color::Rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex_color("#FFAA00"), Some(Color::Rgb(0xff, 0xaa, 0x00)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_hex_color("1a2b3c"), None);
        assert_eq!(parse_hex_color("#1a2b3"), None);
        assert_eq!(parse_hex_color("#1a2b3cd"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn overrides_fall_back_to_palette() {
        let theme = Theme::from_overrides(&ThemeColors::default());
        assert_eq!(theme.base, BG_BASE);
        assert_eq!(theme.accent, ACCENT);

        let theme = Theme::from_overrides(&ThemeColors {
            base: Some("#000000".into()),
            accent: Some("not a color".into()),
        });
        assert_eq!(theme.base, Color::Rgb(0, 0, 0));
        assert_eq!(theme.accent, ACCENT);
    }
}
