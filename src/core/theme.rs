//! # Color Scheme
//!
//! A `ColorScheme` is five `Attribute`s (foreground/background pairs), one
//! per visual role. Schemes are stored as JSON:
//!
//! ```json
//! {
//!   "Normal":    { "Foreground": "White",      "Background": "Blue" },
//!   "Focus":     { "Foreground": "Black",      "Background": "Gray" },
//!   "HotNormal": { "Foreground": "BrightCyan", "Background": "Blue" },
//!   "HotFocus":  { "Foreground": "BrightBlue", "Background": "Gray" },
//!   "Disabled":  { "Foreground": "DarkGray",   "Background": "Blue" }
//! }
//! ```
//!
//! Decoding is strict: keys and color names match case-insensitively, but
//! any unknown key, unknown color or non-object value fails the whole
//! document. Keys that are absent keep their default. Encoding always writes
//! every key in the order above.

use std::fmt;

use ratatui::style::{Color as TermColor, Style};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug)]
pub enum ThemeError {
    Parse(serde_json::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Parse(e) => write!(f, "color scheme parse error: {e}"),
            ThemeError::Encode(e) => write!(f, "color scheme encode error: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {}

// ============================================================================
// Color
// ============================================================================

/// The 16-color terminal palette, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    Gray,
    DarkGray,
    BrightBlue,
    BrightGreen,
    BrightCyan,
    BrightRed,
    BrightMagenta,
    BrightYellow,
    White,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::Gray,
        Color::DarkGray,
        Color::BrightBlue,
        Color::BrightGreen,
        Color::BrightCyan,
        Color::BrightRed,
        Color::BrightMagenta,
        Color::BrightYellow,
        Color::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Brown => "Brown",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::BrightBlue => "BrightBlue",
            Color::BrightGreen => "BrightGreen",
            Color::BrightCyan => "BrightCyan",
            Color::BrightRed => "BrightRed",
            Color::BrightMagenta => "BrightMagenta",
            Color::BrightYellow => "BrightYellow",
            Color::White => "White",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    pub fn to_term(self) -> TermColor {
        match self {
            Color::Black => TermColor::Black,
            Color::Blue => TermColor::Blue,
            Color::Green => TermColor::Green,
            Color::Cyan => TermColor::Cyan,
            Color::Red => TermColor::Red,
            Color::Magenta => TermColor::Magenta,
            Color::Brown => TermColor::Yellow,
            Color::Gray => TermColor::Gray,
            Color::DarkGray => TermColor::DarkGray,
            Color::BrightBlue => TermColor::LightBlue,
            Color::BrightGreen => TermColor::LightGreen,
            Color::BrightCyan => TermColor::LightCyan,
            Color::BrightRed => TermColor::LightRed,
            Color::BrightMagenta => TermColor::LightMagenta,
            Color::BrightYellow => TermColor::LightYellow,
            Color::White => TermColor::White,
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
                Color::from_name(value)
                    .ok_or_else(|| E::custom(format!("unrecognized color name: {value}")))
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

// ============================================================================
// Attribute
// ============================================================================

/// Foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub foreground: Color,
    pub background: Color,
}

impl Attribute {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    pub fn style(self) -> Style {
        Style::default()
            .fg(self.foreground.to_term())
            .bg(self.background.to_term())
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::new(Color::White, Color::Black)
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Attribute", 2)?;
        state.serialize_field("Foreground", &self.foreground)?;
        state.serialize_field("Background", &self.background)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributeVisitor;

        impl<'de> Visitor<'de> for AttributeVisitor {
            type Value = Attribute;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an Attribute object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attribute, A::Error> {
                let mut attribute = Attribute::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "foreground" => attribute.foreground = map.next_value()?,
                        "background" => attribute.background = map.next_value()?,
                        _ => {
                            return Err(de::Error::custom(format!(
                                "Unrecognized Attribute property: {key}"
                            )));
                        }
                    }
                }
                Ok(attribute)
            }
        }

        deserializer.deserialize_map(AttributeVisitor)
    }
}

// ============================================================================
// ColorScheme
// ============================================================================

/// Field names in encoding order.
const SCHEME_KEYS: [&str; 5] = ["Normal", "Focus", "HotNormal", "HotFocus", "Disabled"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorScheme {
    pub normal: Attribute,
    pub focus: Attribute,
    pub hot_normal: Attribute,
    pub hot_focus: Attribute,
    pub disabled: Attribute,
}

impl ColorScheme {
    /// The scheme used when no scheme file is configured.
    pub fn base() -> Self {
        Self {
            normal: Attribute::new(Color::White, Color::Blue),
            focus: Attribute::new(Color::Black, Color::Gray),
            hot_normal: Attribute::new(Color::BrightCyan, Color::Blue),
            hot_focus: Attribute::new(Color::BrightBlue, Color::Gray),
            disabled: Attribute::new(Color::DarkGray, Color::Blue),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(ThemeError::Parse)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(ThemeError::Encode)
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [normal, focus, hot_normal, hot_focus, disabled] = SCHEME_KEYS;
        let mut state = serializer.serialize_struct("ColorScheme", SCHEME_KEYS.len())?;
        state.serialize_field(normal, &self.normal)?;
        state.serialize_field(focus, &self.focus)?;
        state.serialize_field(hot_normal, &self.hot_normal)?;
        state.serialize_field(hot_focus, &self.hot_focus)?;
        state.serialize_field(disabled, &self.disabled)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemeVisitor;

        impl<'de> Visitor<'de> for SchemeVisitor {
            type Value = ColorScheme;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a ColorScheme object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ColorScheme, A::Error> {
                let mut scheme = ColorScheme::default();
                while let Some(key) = map.next_key::<String>()? {
                    let slot = match key.to_ascii_lowercase().as_str() {
                        "normal" => &mut scheme.normal,
                        "focus" => &mut scheme.focus,
                        "hotnormal" => &mut scheme.hot_normal,
                        "hotfocus" => &mut scheme.hot_focus,
                        "disabled" => &mut scheme.disabled,
                        _ => {
                            return Err(de::Error::custom(format!(
                                "Unrecognized ColorScheme Attribute name: {key}."
                            )));
                        }
                    };
                    *slot = map.next_value()?;
                }
                Ok(scheme)
            }
        }

        deserializer.deserialize_map(SchemeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "Normal": { "Foreground": "White", "Background": "Blue" },
        "Focus": { "Foreground": "Black", "Background": "Gray" },
        "HotNormal": { "Foreground": "BrightCyan", "Background": "Blue" },
        "HotFocus": { "Foreground": "BrightBlue", "Background": "Gray" },
        "Disabled": { "Foreground": "DarkGray", "Background": "Blue" }
    }"#;

    #[test]
    fn test_decode_full_scheme() {
        let scheme = ColorScheme::from_json(FULL).unwrap();
        assert_eq!(scheme, ColorScheme::base());
    }

    #[test]
    fn test_round_trip() {
        let scheme = ColorScheme {
            normal: Attribute::new(Color::Brown, Color::Black),
            focus: Attribute::new(Color::BrightYellow, Color::Red),
            hot_normal: Attribute::new(Color::Green, Color::Magenta),
            hot_focus: Attribute::new(Color::BrightMagenta, Color::Cyan),
            disabled: Attribute::new(Color::Gray, Color::BrightRed),
        };
        let json = scheme.to_json().unwrap();
        assert_eq!(ColorScheme::from_json(&json).unwrap(), scheme);
    }

    #[test]
    fn test_encode_emits_all_keys_in_order() {
        let json = ColorScheme::default().to_json().unwrap();
        let positions: Vec<_> = SCHEME_KEYS
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let json = r#"{ "hotFOCUS": { "foreground": "red", "BACKGROUND": "white" } }"#;
        let scheme = ColorScheme::from_json(json).unwrap();
        assert_eq!(scheme.hot_focus, Attribute::new(Color::Red, Color::White));
        assert_eq!(scheme.normal, Attribute::default());
    }

    #[test]
    fn test_unknown_key_fails() {
        let json = r#"{
            "Normal": {}, "Focus": {}, "HotNormal": {}, "HotFocus": {}, "Disabled": {},
            "Extra": {}
        }"#;
        let err = ColorScheme::from_json(json).unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(
            err.to_string()
                .contains("Unrecognized ColorScheme Attribute name: Extra.")
        );
    }

    #[test]
    fn test_non_object_fails() {
        assert!(ColorScheme::from_json("[]").is_err());
        assert!(ColorScheme::from_json("\"Normal\"").is_err());
        assert!(ColorScheme::from_json("42").is_err());
    }

    #[test]
    fn test_malformed_attribute_fails() {
        assert!(ColorScheme::from_json(r#"{ "Normal": "White" }"#).is_err());
        assert!(ColorScheme::from_json(r#"{ "Normal": { "Tint": "White" } }"#).is_err());
        assert!(ColorScheme::from_json(r#"{ "Normal": { "Foreground": "Teal" } }"#).is_err());
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let json = r#"{
            "Focus": { "Foreground": "Red" },
            "focus": { "Foreground": "Green" }
        }"#;
        let scheme = ColorScheme::from_json(json).unwrap();
        assert_eq!(scheme.focus.foreground, Color::Green);
    }

    #[test]
    fn test_attribute_style() {
        let style = Attribute::new(Color::BrightBlue, Color::Brown).style();
        assert_eq!(style.fg, Some(TermColor::LightBlue));
        assert_eq!(style.bg, Some(TermColor::Yellow));
    }
}
