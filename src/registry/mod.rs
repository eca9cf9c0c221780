//! Sprite ownership and the shared palette.
//!
//! This module provides:
//! - `SpriteRegistry`, the sole owner of every `PixelGrid`, keyed by `SpriteHandle`
//! - `SpriteMut`, the write path that notifies the renderer
//! - `Palette`, the four display colors shared by all sprites

mod palette;
mod sprite;

pub use palette::{Palette, PaletteError, DEFAULT_COLORS};
pub use sprite::{SpriteHandle, SpriteMut, SpriteRegistry};
