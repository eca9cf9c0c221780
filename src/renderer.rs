//! Renderer notifications and rasterization.
//!
//! The core never draws anything itself. Whatever displays sprites
//! implements [`Renderer`] and is told about every successful change;
//! [`render_grid`] turns a grid plus palette into pixels for file output.

use image::RgbaImage;

use crate::grid::PixelGrid;
use crate::registry::{Palette, SpriteHandle};

/// Notification sink for sprite changes.
///
/// All methods default to doing nothing.
pub trait Renderer {
    /// One cell was overwritten.
    fn on_cell_changed(&mut self, handle: SpriteHandle, x: usize, y: usize, value: u8) {
        let _ = (handle, x, y, value);
    }

    /// The whole grid changed (resize or decode).
    fn on_grid_replaced(&mut self, handle: SpriteHandle) {
        let _ = handle;
    }

    /// A palette entry changed; every sprite's displayed colors may differ.
    fn on_palette_changed(&mut self) {}
}

/// Renderer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// Renderer that writes each notification to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn on_cell_changed(&mut self, handle: SpriteHandle, x: usize, y: usize, value: u8) {
        log::debug!("sprite {}: cell ({}, {}) = {}", handle, x, y, value);
    }

    fn on_grid_replaced(&mut self, handle: SpriteHandle) {
        log::debug!("sprite {}: grid replaced", handle);
    }

    fn on_palette_changed(&mut self) {
        log::debug!("palette changed");
    }
}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    CellChanged { handle: SpriteHandle, x: usize, y: usize, value: u8 },
    GridReplaced(SpriteHandle),
    PaletteChanged,
}

/// Renderer that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<RenderEvent>,
}

impl EventLog {
    /// Take the recorded events, leaving the log empty.
    pub fn take(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Renderer for EventLog {
    fn on_cell_changed(&mut self, handle: SpriteHandle, x: usize, y: usize, value: u8) {
        self.events.push(RenderEvent::CellChanged { handle, x, y, value });
    }

    fn on_grid_replaced(&mut self, handle: SpriteHandle) {
        self.events.push(RenderEvent::GridReplaced(handle));
    }

    fn on_palette_changed(&mut self) {
        self.events.push(RenderEvent::PaletteChanged);
    }
}

/// Render a grid to an RGBA image, one image pixel per cell.
///
/// # Examples
///
/// ```
/// use gbsprite::grid::PixelGrid;
/// use gbsprite::registry::Palette;
/// use gbsprite::renderer::render_grid;
///
/// let mut grid = PixelGrid::new(8, 8).unwrap();
/// grid.set_cell(1, 0, 3).unwrap();
///
/// let image = render_grid(&grid, &Palette::default());
/// assert_eq!(image.dimensions(), (8, 8));
/// assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255, 255]);
/// assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
/// ```
pub fn render_grid(grid: &PixelGrid, palette: &Palette) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &index) in row.iter().enumerate() {
            image.put_pixel(x as u32, y as u32, palette.color_for(index).to_rgba());
        }
    }
    image
}
