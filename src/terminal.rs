//! Terminal previews of a sprite.
//!
//! [`render_ansi_grid`] paints each cell with a 24-bit background color;
//! [`render_coordinate_grid`] prints the raw indices with row/column headers
//! for terminals without true color or for piping.

use crate::color::Color;
use crate::grid::{PixelGrid, TILE_SIZE};
use crate::registry::Palette;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a color to an ANSI 24-bit background escape sequence.
///
/// Transparent colors (alpha = 0) are rendered as a dark gray background.
///
/// ```
/// use gbsprite::color::Color;
/// use gbsprite::terminal::color_to_ansi_bg;
///
/// assert_eq!(color_to_ansi_bg(Color::from_rgb(255, 0, 0)), "\x1b[48;2;255;0;0m");
/// ```
pub fn color_to_ansi_bg(color: Color) -> String {
    if color.a == 0 {
        "\x1b[48;5;236m".to_string()
    } else {
        format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Render a grid with ANSI color backgrounds, followed by a palette legend.
///
/// Each cell is two spaces wide so pixels come out roughly square.
pub fn render_ansi_grid(grid: &PixelGrid, palette: &Palette) -> String {
    let mut output = String::new();

    for row in grid.rows() {
        for &index in row {
            output.push_str(&color_to_ansi_bg(palette.color_for(index)));
            output.push_str("  ");
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }

    output.push_str("\nLegend:\n");
    for (index, color) in palette.colors().iter().enumerate() {
        output.push_str(&format!(
            "  {}  {} {} = {}\n",
            color_to_ansi_bg(*color),
            ANSI_RESET,
            index,
            color
        ));
    }

    output
}

/// Render a grid as index digits with coordinate headers.
///
/// Tile boundaries are marked with a gap every 8 columns and a blank line
/// every 8 rows.
///
/// ```
/// use gbsprite::grid::PixelGrid;
/// use gbsprite::terminal::render_coordinate_grid;
///
/// let grid = PixelGrid::new(8, 8).unwrap();
/// let text = render_coordinate_grid(&grid);
/// assert!(text.contains("  0 │ 0 0 0 0 0 0 0 0"));
/// ```
pub fn render_coordinate_grid(grid: &PixelGrid) -> String {
    let mut output = String::from("    ");
    for x in 0..grid.width() {
        if x > 0 && x % TILE_SIZE == 0 {
            output.push(' ');
        }
        output.push_str(&format!("{:>2}", x % 100));
    }
    output.push('\n');
    output.push_str("    ┌");
    output.push_str(&"─".repeat(grid.width() * 2 + grid.tiles_wide() - 1));
    output.push('\n');

    for (y, row) in grid.rows().enumerate() {
        if y > 0 && y % TILE_SIZE == 0 {
            output.push_str("    │\n");
        }
        output.push_str(&format!("{:>3} │", y));
        for (x, &index) in row.iter().enumerate() {
            if x > 0 && x % TILE_SIZE == 0 {
                output.push(' ');
            }
            output.push(' ');
            output.push(char::from(b'0' + index));
        }
        output.push('\n');
    }

    output
}
