//! Sprite registry: owns every grid and routes mutations to the renderer.

use std::collections::BTreeMap;
use std::ops::Deref;

use crate::codec;
use crate::color::Color;
use crate::error::SpriteError;
use crate::grid::{validate_color_index, PixelGrid};
use crate::renderer::{NullRenderer, Renderer};

use super::palette::Palette;

/// Opaque key for a sprite in a [`SpriteRegistry`].
///
/// Handles are issued sequentially and never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteHandle(pub(crate) u64);

impl SpriteHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SpriteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns a set of sprites, the shared palette and the current paint color.
///
/// Reads go through [`SpriteRegistry::get`]. Writes go through
/// [`SpriteRegistry::get_mut`], whose [`SpriteMut`] tells the renderer
/// about every successful change.
#[derive(Debug)]
pub struct SpriteRegistry<R: Renderer = NullRenderer> {
    sprites: BTreeMap<SpriteHandle, PixelGrid>,
    // monotonic, so handles are never reused
    next_id: u64,
    palette: Palette,
    paint_color: u8,
    renderer: R,
}

impl SpriteRegistry<NullRenderer> {
    /// Create an empty registry with the default palette and no renderer.
    pub fn new() -> Self {
        Self::with_renderer(NullRenderer)
    }
}

impl Default for SpriteRegistry<NullRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> SpriteRegistry<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self::with_palette(Palette::default(), renderer)
    }

    pub fn with_palette(palette: Palette, renderer: R) -> Self {
        Self { sprites: BTreeMap::new(), next_id: 0, palette, paint_color: 0, renderer }
    }

    /// Create a blank sprite and return its handle.
    pub fn create_sprite(&mut self, width: usize, height: usize) -> Result<SpriteHandle, SpriteError> {
        let grid = PixelGrid::new(width, height)?;
        Ok(self.insert(grid))
    }

    /// Take ownership of an existing grid.
    pub fn insert(&mut self, grid: PixelGrid) -> SpriteHandle {
        let handle = SpriteHandle(self.next_id);
        self.next_id += 1;
        log::debug!("created sprite {} ({}x{})", handle, grid.width(), grid.height());
        self.sprites.insert(handle, grid);
        handle
    }

    /// Drop a sprite from the registry and hand its grid back.
    pub fn remove(&mut self, handle: SpriteHandle) -> Result<PixelGrid, SpriteError> {
        let grid = self.sprites.remove(&handle).ok_or(SpriteError::UnknownHandle(handle))?;
        log::debug!("removed sprite {}", handle);
        Ok(grid)
    }

    pub fn get(&self, handle: SpriteHandle) -> Result<&PixelGrid, SpriteError> {
        self.sprites.get(&handle).ok_or(SpriteError::UnknownHandle(handle))
    }

    /// Mutable access to a sprite, with renderer notification.
    pub fn get_mut(&mut self, handle: SpriteHandle) -> Result<SpriteMut<'_, R>, SpriteError> {
        let grid = self.sprites.get_mut(&handle).ok_or(SpriteError::UnknownHandle(handle))?;
        Ok(SpriteMut { handle, grid, renderer: &mut self.renderer })
    }

    pub fn contains(&self, handle: SpriteHandle) -> bool {
        self.sprites.contains_key(&handle)
    }

    /// Handles in creation order.
    pub fn handles(&self) -> impl Iterator<Item = SpriteHandle> + '_ {
        self.sprites.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Change one palette entry.
    ///
    /// Grid cells keep their indices; only the renderer hears about it.
    pub fn set_palette_entry(&mut self, index: u8, color: Color) -> Result<(), SpriteError> {
        self.palette.set(index, color)?;
        log::debug!("palette entry {} set to {}", index, color);
        self.renderer.on_palette_changed();
        Ok(())
    }

    pub fn current_paint_color(&self) -> u8 {
        self.paint_color
    }

    pub fn set_current_paint_color(&mut self, index: u8) -> Result<(), SpriteError> {
        self.paint_color = validate_color_index(index)?;
        Ok(())
    }

    /// Paint one cell of a sprite with the current paint color.
    pub fn paint_cell(&mut self, handle: SpriteHandle, x: usize, y: usize) -> Result<(), SpriteError> {
        let color = self.paint_color;
        self.get_mut(handle)?.set_cell(x, y, color)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

/// Borrowed write access to one sprite.
///
/// Each method validates, mutates, then notifies the renderer. Failed calls
/// leave the grid untouched and send nothing.
pub struct SpriteMut<'a, R: Renderer> {
    handle: SpriteHandle,
    grid: &'a mut PixelGrid,
    renderer: &'a mut R,
}

impl<R: Renderer> SpriteMut<'_, R> {
    pub fn handle(&self) -> SpriteHandle {
        self.handle
    }

    pub fn set_cell(&mut self, x: usize, y: usize, value: u8) -> Result<(), SpriteError> {
        self.grid.set_cell(x, y, value)?;
        self.renderer.on_cell_changed(self.handle, x, y, value);
        Ok(())
    }

    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), SpriteError> {
        let (old_w, old_h) = (self.grid.width(), self.grid.height());
        self.grid.resize(width, height)?;
        log::debug!("resized sprite {} {}x{} -> {}x{}", self.handle, old_w, old_h, width, height);
        self.renderer.on_grid_replaced(self.handle);
        Ok(())
    }

    /// Replace the contents from hex text.
    pub fn decode(&mut self, text: &str) -> Result<(), SpriteError> {
        codec::decode(self.grid, text)?;
        self.renderer.on_grid_replaced(self.handle);
        Ok(())
    }

    /// Replace the contents from raw tile bytes.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), SpriteError> {
        codec::from_bytes(self.grid, bytes)?;
        self.renderer.on_grid_replaced(self.handle);
        Ok(())
    }
}

impl<R: Renderer> Deref for SpriteMut<'_, R> {
    type Target = PixelGrid;

    fn deref(&self) -> &PixelGrid {
        self.grid
    }
}
