//! Color handling for style rules.
//!
//! Colors are stored as normalized lowercase `#rrggbb` strings. Both the
//! short (`#rgb`) and long (`#rrggbb`) hex forms are accepted on input;
//! the short form is expanded during parsing.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color `{0}`, expected `#rgb` or `#rrggbb`")]
pub struct ColorError(String);

/// A hex RGB color used by element and relationship styles.
///
/// # Examples
///
/// ```
/// use maquette_core::color::Color;
///
/// let dark_red: Color = "#801515".parse().unwrap();
/// assert_eq!(dark_red.to_string(), "#801515");
///
/// // Short form is expanded and case is normalized
/// let white: Color = "#FFF".parse().unwrap();
/// assert_eq!(white.to_string(), "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a color from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the string is not a `#rgb` or `#rrggbb`
    /// hex color.
    pub fn new(value: &str) -> Result<Self, ColorError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorError(value.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError(value.to_string()));
        }

        let normalized = match digits.len() {
            3 => {
                let mut expanded = String::with_capacity(7);
                expanded.push('#');
                for c in digits.chars() {
                    let c = c.to_ascii_lowercase();
                    expanded.push(c);
                    expanded.push(c);
                }
                expanded
            }
            6 => format!("#{}", digits.to_ascii_lowercase()),
            _ => return Err(ColorError(value.to_string())),
        };

        Ok(Self(normalized))
    }

    /// Get the normalized `#rrggbb` representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color = Color::new("#d46a6a").unwrap();
        assert_eq!(color.as_str(), "#d46a6a");
    }

    #[test]
    fn test_parse_normalizes_case() {
        let color = Color::new("#D46A6A").unwrap();
        assert_eq!(color.as_str(), "#d46a6a");
    }

    #[test]
    fn test_parse_short_form() {
        let color = Color::new("#fff").unwrap();
        assert_eq!(color.as_str(), "#ffffff");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::new("white").is_err());
        assert!(Color::new("#55000").is_err());
        assert!(Color::new("#gggggg").is_err());
        assert!(Color::new("").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let color = Color::new("#550000").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#550000\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<Color, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }
}
