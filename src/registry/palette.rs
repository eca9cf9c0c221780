//! The shared four-entry palette.

use thiserror::Error;

use crate::color::{parse_color, Color, ColorError};
use crate::error::SpriteError;
use crate::grid::validate_color_index;

/// Original handheld shades, darkest first: black, dark grey, light grey, white.
pub const DEFAULT_COLORS: [Color; 4] = [
    Color::from_rgb(0x00, 0x00, 0x00),
    Color::from_rgb(0x44, 0x44, 0x44),
    Color::from_rgb(0xCC, 0xCC, 0xCC),
    Color::from_rgb(0xFF, 0xFF, 0xFF),
];

/// Error when building a palette from color strings.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PaletteError {
    /// Not exactly four colors
    #[error("palette needs exactly 4 colors, got {0}")]
    WrongLength(usize),
    /// One of the colors did not parse
    #[error("palette color {index} ('{value}'): {source}")]
    Color {
        index: usize,
        value: String,
        #[source]
        source: ColorError,
    },
}

/// Maps color indices 0..=3 to display colors.
///
/// The codec never looks at this; it only matters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS }
    }
}

impl Palette {
    pub fn new(colors: [Color; 4]) -> Self {
        Self { colors }
    }

    /// Parse four CSS color strings, in index order.
    ///
    /// ```
    /// use gbsprite::registry::Palette;
    ///
    /// let palette = Palette::parse(&["#0f380f", "#306230", "#8bac0f", "#9bbc0f"]).unwrap();
    /// assert_eq!(palette.get(3).unwrap().to_hex(), "#9BBC0F");
    /// ```
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        if colors.len() != 4 {
            return Err(PaletteError::WrongLength(colors.len()));
        }
        let mut parsed = DEFAULT_COLORS;
        for (index, value) in colors.iter().enumerate() {
            let value = value.as_ref();
            parsed[index] = parse_color(value).map_err(|source| PaletteError::Color {
                index,
                value: value.to_string(),
                source,
            })?;
        }
        Ok(Self { colors: parsed })
    }

    /// Color for a checked index.
    pub fn get(&self, index: u8) -> Result<Color, SpriteError> {
        validate_color_index(index)?;
        Ok(self.colors[index as usize])
    }

    pub(crate) fn set(&mut self, index: u8, color: Color) -> Result<(), SpriteError> {
        validate_color_index(index)?;
        self.colors[index as usize] = color;
        Ok(())
    }

    /// Color for a grid cell. Cells are always 0..=3, so only the low two
    /// bits are looked at.
    pub fn color_for(&self, index: u8) -> Color {
        self.colors[(index & 3) as usize]
    }

    pub fn colors(&self) -> &[Color; 4] {
        &self.colors
    }
}
