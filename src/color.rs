//! Display colors for palette entries.
//!
//! Palette colors come from CSS color strings:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Anything else lightningcss understands: `rgb()`, `hsl()`, named colors...

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// An opaque RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse a CSS color string.
///
/// ```
/// use gbsprite::color::{parse_color, Color};
///
/// assert_eq!(parse_color("#CCC").unwrap(), Color::from_rgb(0xCC, 0xCC, 0xCC));
/// assert_eq!(parse_color("white").unwrap(), Color::from_rgb(255, 255, 255));
/// ```
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    match s.strip_prefix('#') {
        Some(hex) => parse_hex_color(hex),
        None => parse_css_color(s),
    }
}

fn parse_hex_color(hex: &str) -> Result<Color, ColorError> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    // Short forms double each digit: #F00 -> #FF0000
    let channels: Vec<u8> = match hex.len() {
        3 | 4 => hex.chars().map(|c| hex_digit(c) * 17).collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| hex_digit(hex.as_bytes()[i] as char) * 16 + hex_digit(hex.as_bytes()[i + 1] as char))
            .collect(),
        len => return Err(ColorError::InvalidLength(len)),
    };

    Ok(Color {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        a: channels.get(3).copied().unwrap_or(255),
    })
}

/// Caller has already checked `c.is_ascii_hexdigit()`.
fn hex_digit(c: char) -> u8 {
    c.to_digit(16).unwrap_or(0) as u8
}

fn parse_css_color(s: &str) -> Result<Color, ColorError> {
    use lightningcss::values::color::FloatColor;

    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb_color = css_color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => {
            Ok(Color { r: rgba.red, g: rgba.green, b: rgba.blue, a: rgba.alpha })
        }
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => Ok(Color {
                r: (rgb.r * 255.0).round() as u8,
                g: (rgb.g * 255.0).round() as u8,
                b: (rgb.b * 255.0).round() as u8,
                a: (rgb.alpha * 255.0).round() as u8,
            }),
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#444444").unwrap(), Color::from_rgb(0x44, 0x44, 0x44));
        assert_eq!(parse_color("#f00").unwrap(), Color::from_rgb(255, 0, 0));
        assert_eq!(parse_color("#FF000080").unwrap(), Color { r: 255, g: 0, b: 0, a: 0x80 });
        assert_eq!(parse_color("#0008").unwrap(), Color { r: 0, g: 0, b: 0, a: 0x88 });
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(parse_color(""), Err(ColorError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorError::InvalidLength(5)));
        assert_eq!(parse_color("#12G"), Err(ColorError::InvalidHex('G')));
    }

    #[test]
    fn test_css_forms() {
        assert_eq!(parse_color("rgb(0, 255, 0)").unwrap(), Color::from_rgb(0, 255, 0));
        assert_eq!(parse_color("black").unwrap(), Color::from_rgb(0, 0, 0));
        assert!(matches!(parse_color("not-a-color"), Err(ColorError::CssParse(_))));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::from_rgb(0xCC, 0xCC, 0xCC).to_hex(), "#CCCCCC");
        assert_eq!(Color { r: 1, g: 2, b: 3, a: 4 }.to_string(), "#01020304");
    }
}
