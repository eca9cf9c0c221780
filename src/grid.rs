//! Pixel grid of 2-bit color indices.
//!
//! A [`PixelGrid`] is always a whole number of 8x8 tiles. Cells hold palette
//! indices (0..=3), never colors.

use serde::Serialize;

use crate::error::SpriteError;

/// Edge length of a tile in pixels.
pub const TILE_SIZE: usize = 8;

/// Largest valid color index.
pub const MAX_COLOR_INDEX: u8 = 3;

/// Check that a width/height pair is made of whole tiles.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), SpriteError> {
    if width == 0 || height == 0 || width % TILE_SIZE != 0 || height % TILE_SIZE != 0 {
        return Err(SpriteError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Check that a value is a 2-bit color index.
pub fn validate_color_index(value: u8) -> Result<u8, SpriteError> {
    if value > MAX_COLOR_INDEX {
        return Err(SpriteError::InvalidColorIndex(value));
    }
    Ok(value)
}

/// A width x height matrix of color indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
}

impl PixelGrid {
    /// Create a grid filled with color index 0.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::InvalidDimension`] unless both dimensions are
    /// positive multiples of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbsprite::grid::PixelGrid;
    ///
    /// let grid = PixelGrid::new(16, 8).unwrap();
    /// assert_eq!(grid.get_cell(15, 7), Ok(0));
    /// assert!(PixelGrid::new(12, 8).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, SpriteError> {
        validate_dimensions(width, height)?;
        Ok(Self { width, height, rows: vec![vec![0; width]; height] })
    }

    /// Build a grid from explicit rows.
    ///
    /// All rows must have the same length, the resulting dimensions must be
    /// whole tiles and every value must be a valid color index.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::InvalidDimension`] for ragged rows or a size
    /// that is not whole tiles, and [`SpriteError::InvalidColorIndex`] for
    /// the first value above 3.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, SpriteError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(width, height)?;

        for row in &rows {
            if row.len() != width {
                return Err(SpriteError::InvalidDimension { width: row.len(), height });
            }
            for &value in row {
                validate_color_index(value)?;
            }
        }

        Ok(Self { width, height, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tile columns.
    pub fn tiles_wide(&self) -> usize {
        self.width / TILE_SIZE
    }

    /// Number of tile rows.
    pub fn tiles_high(&self) -> usize {
        self.height / TILE_SIZE
    }

    /// Size of the packed tile encoding in bytes (2 bits per pixel).
    pub fn byte_len(&self) -> usize {
        self.width * self.height / 4
    }

    /// Read one cell.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<u8, SpriteError> {
        self.check_bounds(x, y)?;
        Ok(self.rows[y][x])
    }

    /// Overwrite one cell.
    ///
    /// Bounds are checked before the color index.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::OutOfBounds`] for a cell outside the grid, then
    /// [`SpriteError::InvalidColorIndex`] if `value > 3`. Nothing is written
    /// on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbsprite::grid::PixelGrid;
    /// use gbsprite::SpriteError;
    ///
    /// let mut grid = PixelGrid::new(8, 8).unwrap();
    /// grid.set_cell(2, 5, 3).unwrap();
    /// assert_eq!(grid.get_cell(2, 5), Ok(3));
    ///
    /// assert!(matches!(grid.set_cell(8, 0, 9), Err(SpriteError::OutOfBounds { .. })));
    /// assert!(matches!(grid.set_cell(0, 0, 4), Err(SpriteError::InvalidColorIndex(4))));
    /// ```
    pub fn set_cell(&mut self, x: usize, y: usize, value: u8) -> Result<(), SpriteError> {
        self.check_bounds(x, y)?;
        validate_color_index(value)?;
        self.rows[y][x] = value;
        Ok(())
    }

    /// Resize to new dimensions, keeping the overlapping region.
    ///
    /// Every cell with `x < min(old_w, new_w)` and `y < min(old_h, new_h)`
    /// keeps its value; every other cell of the new grid is 0. Growing and
    /// shrinking in either axis follow the same rule.
    ///
    /// Shrinking may discard non-zero pixels. The grid does not ask for
    /// confirmation; callers that need one check [`PixelGrid::would_discard`]
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::InvalidDimension`] unless both new dimensions
    /// are positive multiples of 8. The grid is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbsprite::grid::PixelGrid;
    ///
    /// let mut grid = PixelGrid::new(8, 8).unwrap();
    /// grid.set_cell(7, 7, 2).unwrap();
    /// grid.resize(16, 8).unwrap();
    /// assert_eq!(grid.get_cell(7, 7), Ok(2));
    /// assert_eq!(grid.get_cell(15, 7), Ok(0));
    /// ```
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), SpriteError> {
        validate_dimensions(new_width, new_height)?;

        let keep_w = self.width.min(new_width);
        let rows: Vec<Vec<u8>> = (0..new_height)
            .map(|y| {
                let mut row = vec![0; new_width];
                if let Some(old) = self.rows.get(y) {
                    row[..keep_w].copy_from_slice(&old[..keep_w]);
                }
                row
            })
            .collect();

        self.width = new_width;
        self.height = new_height;
        self.rows = rows;
        Ok(())
    }

    /// Whether resizing to `new_width` x `new_height` would drop any
    /// non-zero pixel.
    pub fn would_discard(&self, new_width: usize, new_height: usize) -> bool {
        self.rows.iter().enumerate().any(|(y, row)| {
            row.iter().enumerate().any(|(x, &v)| v != 0 && (x >= new_width || y >= new_height))
        })
    }

    /// Borrow one row of cells.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// True when every cell is index 0.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&v| v == 0))
    }

    /// Swap in a fully validated cell matrix of the current dimensions.
    pub(crate) fn replace_rows(&mut self, rows: Vec<Vec<u8>>) {
        debug_assert_eq!(rows.len(), self.height);
        debug_assert!(rows.iter().all(|r| r.len() == self.width));
        self.rows = rows;
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), SpriteError> {
        if x >= self.width || y >= self.height {
            return Err(SpriteError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
