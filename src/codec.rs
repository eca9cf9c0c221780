//! Packed 2bpp tile encoding.
//!
//! The grid is cut into 8x8 tiles, visited row-major. Each tile contributes
//! its 8 pixel rows top to bottom, and each pixel row is two bytes:
//!
//! - the strong byte holds bit 1 of every pixel's index,
//! - the weak byte holds bit 0,
//!
//! with the leftmost pixel in bit 7. So `de af` decodes to `3 2 1 2 3 3 3 1`.
//!
//! The text form is lowercase two-digit hex per byte. Separators are
//! whitespace only and decoding ignores whitespace, so every [`Separator`]
//! round-trips.

use serde::{Deserialize, Serialize};

use crate::error::SpriteError;
use crate::grid::{PixelGrid, TILE_SIZE};

/// Bytes per pixel row of a tile (strong + weak).
pub const BYTES_PER_TILE_ROW: usize = 2;

/// Bytes per 8x8 tile.
pub const BYTES_PER_TILE: usize = TILE_SIZE * BYTES_PER_TILE_ROW;

/// Whitespace placed between bytes in hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `deafcafe`
    #[serde(rename = "none")]
    #[value(name = "none")]
    Packed,
    /// `de af ca fe`
    #[default]
    Space,
    /// one byte per line
    Newline,
}

impl Separator {
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Separator::Packed => None,
            Separator::Space => Some(" "),
            Separator::Newline => Some("\n"),
        }
    }
}

/// Pack one 8-pixel tile row into its `[strong, weak]` byte pair.
///
/// # Examples
///
/// ```
/// use gbsprite::codec::encode_row;
///
/// assert_eq!(encode_row(&[3, 2, 1, 2, 3, 3, 3, 1]), [0xde, 0xaf]);
/// ```
pub fn encode_row(pixels: &[u8]) -> [u8; 2] {
    let mut strong = 0u8;
    let mut weak = 0u8;
    for (x, &value) in pixels.iter().take(TILE_SIZE).enumerate() {
        let bit = 7 - x;
        strong |= ((value & 2) >> 1) << bit;
        weak |= (value & 1) << bit;
    }
    [strong, weak]
}

/// Unpack a `strong`/`weak` byte pair into 8 color indices, left to right.
pub fn decode_row(strong: u8, weak: u8) -> [u8; TILE_SIZE] {
    let mut pixels = [0u8; TILE_SIZE];
    for (x, pixel) in pixels.iter_mut().enumerate() {
        let bit = 7 - x;
        *pixel = (((strong >> bit) & 1) << 1) | ((weak >> bit) & 1);
    }
    pixels
}

/// Pack a grid into raw tile bytes.
pub fn to_bytes(grid: &PixelGrid) -> Vec<u8> {
    let rows: Vec<&[u8]> = grid.rows().collect();
    let mut bytes = Vec::with_capacity(grid.byte_len());

    for ty in 0..grid.tiles_high() {
        for tx in 0..grid.tiles_wide() {
            let left = tx * TILE_SIZE;
            for py in 0..TILE_SIZE {
                let row = rows[ty * TILE_SIZE + py];
                bytes.extend_from_slice(&encode_row(&row[left..left + TILE_SIZE]));
            }
        }
    }

    bytes
}

/// Encode a grid as hex text.
///
/// `separator` is placed between consecutive bytes, never after the last
/// one.
///
/// # Examples
///
/// ```
/// use gbsprite::codec::{encode, Separator};
/// use gbsprite::grid::PixelGrid;
///
/// let mut grid = PixelGrid::new(8, 8).unwrap();
/// grid.set_cell(0, 0, 3).unwrap();
///
/// assert!(encode(&grid, Separator::Space).starts_with("80 80 00"));
/// assert!(encode(&grid, Separator::Packed).starts_with("808000"));
/// assert!(!encode(&grid, Separator::Newline).ends_with('\n'));
/// ```
pub fn encode(grid: &PixelGrid, separator: Separator) -> String {
    let bytes = to_bytes(grid);
    match separator.as_str() {
        None => hex::encode(bytes),
        Some(sep) => bytes.iter().map(|b| hex::encode([*b])).collect::<Vec<_>>().join(sep),
    }
}

/// Decode hex text into `grid`, keeping its dimensions.
///
/// All whitespace is stripped first. At least `grid.byte_len() * 2` hex
/// digits must remain, and anything after them is ignored. Either case is
/// accepted.
///
/// # Errors
///
/// Returns [`SpriteError::MalformedInput`] if fewer digits remain than the
/// grid needs, or if a non-hex character appears among them. The grid is
/// left untouched on error.
///
/// # Examples
///
/// ```
/// use gbsprite::codec::decode;
/// use gbsprite::grid::PixelGrid;
///
/// let mut grid = PixelGrid::new(8, 8).unwrap();
/// let text = format!("de af ca fe {}", "00 ".repeat(12));
/// decode(&mut grid, &text).unwrap();
/// assert_eq!(grid.row(0), Some(&[3, 2, 1, 2, 3, 3, 3, 1][..]));
///
/// assert!(decode(&mut grid, "deaf cafe").is_err());
/// ```
pub fn decode(grid: &mut PixelGrid, text: &str) -> Result<(), SpriteError> {
    let digits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let required = grid.byte_len() * 2;
    if digits.len() < required {
        return Err(SpriteError::too_short(required, digits.len(), "hex digits"));
    }

    let prefix: String = digits[..required].iter().collect();
    let bytes = hex::decode(&prefix).map_err(|e| malformed_hex(&prefix, e))?;

    if digits.len() > required {
        log::warn!("ignoring {} trailing hex digits after tile data", digits.len() - required);
    }

    grid.replace_rows(unpack(grid, &bytes));
    Ok(())
}

/// Decode raw tile bytes into `grid`, keeping its dimensions.
///
/// Needs at least `grid.byte_len()` bytes; extra bytes are ignored.
///
/// # Errors
///
/// Returns [`SpriteError::MalformedInput`] if `bytes` is too short. The grid
/// is left untouched on error.
pub fn from_bytes(grid: &mut PixelGrid, bytes: &[u8]) -> Result<(), SpriteError> {
    let required = grid.byte_len();
    if bytes.len() < required {
        return Err(SpriteError::too_short(required, bytes.len(), "bytes"));
    }
    if bytes.len() > required {
        log::warn!("ignoring {} trailing bytes after tile data", bytes.len() - required);
    }

    grid.replace_rows(unpack(grid, &bytes[..required]));
    Ok(())
}

/// `hex` reports byte offsets, and a multi-byte char can surface as an odd
/// length instead, so the position is recounted in chars.
fn malformed_hex(digits: &str, err: hex::FromHexError) -> SpriteError {
    let found = match digits.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((position, c)) => format!("'{}' at digit {}", c, position),
        None => err.to_string(),
    };
    SpriteError::MalformedInput { expected: "hexadecimal digit".to_string(), found }
}

/// Build the cell matrix for `grid`'s dimensions from exactly
/// `grid.byte_len()` bytes.
fn unpack(grid: &PixelGrid, bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut rows = vec![vec![0u8; grid.width()]; grid.height()];
    let tiles_wide = grid.tiles_wide();

    for (i, pair) in bytes.chunks_exact(BYTES_PER_TILE_ROW).enumerate() {
        let tile = i / TILE_SIZE;
        let y = (tile / tiles_wide) * TILE_SIZE + i % TILE_SIZE;
        let left = (tile % tiles_wide) * TILE_SIZE;
        rows[y][left..left + TILE_SIZE].copy_from_slice(&decode_row(pair[0], pair[1]));
    }

    rows
}
