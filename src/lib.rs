//! Gbsprite - 2bpp tile sprites
//!
//! This library provides:
//! - `PixelGrid`, a grid of 2-bit color indices made of whole 8x8 tiles
//! - the packed tile codec (strong/weak bit planes, hex text or raw bytes)
//! - `SpriteRegistry`, which owns sprites and the shared four-color palette
//!   and reports every change to a `Renderer`
//!
//! ```
//! use gbsprite::codec::{self, Separator};
//! use gbsprite::registry::SpriteRegistry;
//!
//! let mut registry = SpriteRegistry::new();
//! let hero = registry.create_sprite(8, 8).unwrap();
//!
//! registry.set_current_paint_color(3).unwrap();
//! registry.paint_cell(hero, 0, 0).unwrap();
//!
//! let hex = codec::encode(registry.get(hero).unwrap(), Separator::Space);
//! assert!(hex.starts_with("80 80 00 00"));
//! ```

pub mod cli;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod registry;
pub mod renderer;
pub mod terminal;

pub use error::SpriteError;
pub use grid::PixelGrid;
pub use registry::{SpriteHandle, SpriteRegistry};
