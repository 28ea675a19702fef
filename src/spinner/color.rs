//! Named color tokens for the spinner glyph.
//!
//! Tokens use the camelCase names common to terminal color libraries
//! (`green`, `greenBright`, `blackBright`, ...), also accept the dotted
//! form understood by `console` (`green.bright`), and a bare number for a
//! fixed 256-color palette index (`208`).

use console::{Color, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Hues a token can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Index into the 256-color palette
    Fixed(u8),
}

const NAMED_HUES: [(&str, Hue); 8] = [
    ("black", Hue::Black),
    ("red", Hue::Red),
    ("green", Hue::Green),
    ("yellow", Hue::Yellow),
    ("blue", Hue::Blue),
    ("magenta", Hue::Magenta),
    ("cyan", Hue::Cyan),
    ("white", Hue::White),
];

impl Hue {
    fn color(self) -> Color {
        match self {
            Hue::Black => Color::Black,
            Hue::Red => Color::Red,
            Hue::Green => Color::Green,
            Hue::Yellow => Color::Yellow,
            Hue::Blue => Color::Blue,
            Hue::Magenta => Color::Magenta,
            Hue::Cyan => Color::Cyan,
            Hue::White => Color::White,
            Hue::Fixed(index) => Color::Color256(index),
        }
    }
}

/// A foreground color applied to the spinner glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorToken {
    hue: Hue,
    bright: bool,
}

impl ColorToken {
    /// Palette indices have no bright variant; the flag is dropped for them.
    pub const fn new(hue: Hue, bright: bool) -> Self {
        let bright = bright && !matches!(hue, Hue::Fixed(_));
        Self { hue, bright }
    }

    pub const fn bright(hue: Hue) -> Self {
        Self::new(hue, true)
    }

    pub const fn fixed(index: u8) -> Self {
        Self::new(Hue::Fixed(index), false)
    }

    /// Wrap `text` in this token's SGR sequence.
    ///
    /// When `force` is false, `console` decides from the environment
    /// whether styling is emitted at all.
    pub fn paint(&self, text: &str, force: bool) -> String {
        let mut style = Style::new().fg(self.hue.color());
        if self.bright {
            style = style.bright();
        }
        if force {
            style = style.force_styling(true);
        }
        style.apply_to(text).to_string()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.hue {
            Hue::Fixed(index) => return write!(f, "{}", index),
            Hue::Black => "black",
            Hue::Red => "red",
            Hue::Green => "green",
            Hue::Yellow => "yellow",
            Hue::Blue => "blue",
            Hue::Magenta => "magenta",
            Hue::Cyan => "cyan",
            Hue::White => "white",
        };
        if self.bright {
            write!(f, "{}Bright", name)
        } else {
            f.write_str(name)
        }
    }
}

impl FromStr for ColorToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            return Ok(ColorToken::fixed(index));
        }

        let (base, bright) = if let Some(base) = trimmed.strip_suffix(".bright") {
            (base, true)
        } else if let Some(base) = trimmed.strip_suffix("Bright") {
            (base, true)
        } else {
            (trimmed, false)
        };

        let base = base.to_lowercase();
        NAMED_HUES
            .iter()
            .find(|(name, _)| *name == base)
            .map(|(_, hue)| ColorToken::new(*hue, bright))
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for ColorToken {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_bright() {
        let token: ColorToken = "greenBright".parse().unwrap();
        assert_eq!(token, ColorToken::bright(Hue::Green));
        assert_eq!(token.to_string(), "greenBright");
    }

    #[test]
    fn test_parse_dotted_and_plain() {
        assert_eq!(
            "red.bright".parse::<ColorToken>().unwrap(),
            ColorToken::bright(Hue::Red)
        );
        assert_eq!(
            "Cyan".parse::<ColorToken>().unwrap(),
            ColorToken::new(Hue::Cyan, false)
        );
    }

    #[test]
    fn test_fixed_index_keeps_its_number() {
        let token: ColorToken = "208".parse().unwrap();
        assert_eq!(token, ColorToken::fixed(208));
        assert_eq!(token.to_string(), "208");

        // No bright variant for palette colors
        assert_eq!(ColorToken::bright(Hue::Fixed(12)), ColorToken::fixed(12));
        assert_eq!(ColorToken::bright(Hue::Fixed(12)).to_string(), "12");
    }

    #[test]
    fn test_every_token_displays_as_it_parses() {
        let mut tokens: Vec<ColorToken> = NAMED_HUES
            .iter()
            .flat_map(|(_, hue)| [ColorToken::new(*hue, false), ColorToken::bright(*hue)])
            .collect();
        tokens.extend([ColorToken::fixed(0), ColorToken::fixed(255)]);

        for token in tokens {
            assert_eq!(token.to_string().parse::<ColorToken>().unwrap(), token);
        }
    }

    #[test]
    fn test_serde_uses_token_names() {
        let json = serde_json::to_string(&ColorToken::bright(Hue::Yellow)).unwrap();
        assert_eq!(json, "\"yellowBright\"");

        let fixed: ColorToken = serde_json::from_str("\"99\"").unwrap();
        assert_eq!(fixed, ColorToken::fixed(99));
        assert!(serde_json::from_str::<ColorToken>("\"plaid\"").is_err());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let err = "chartreuse".parse::<ColorToken>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownColor(ref name) if name == "chartreuse"));
        assert!("256".parse::<ColorToken>().is_err());
    }

    #[test]
    fn test_paint_wraps_text() {
        let painted = ColorToken::bright(Hue::Blue).paint("⠋", true);
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("⠋"));
        assert_eq!(console::strip_ansi_codes(&painted), "⠋");
    }
}
