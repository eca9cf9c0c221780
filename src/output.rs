//! Sprite file I/O and PNG output

use image::imageops::FilterType;
use image::RgbaImage;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::codec::{self, Separator};
use crate::error::SpriteError;
use crate::grid::PixelGrid;
use crate::registry::SpriteMut;
use crate::renderer::Renderer;

/// Error type for file operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// File contents did not fit the sprite
    #[error("{0}")]
    Sprite(#[from] SpriteError),
}

/// On-disk form of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SpriteFormat {
    /// Hex text, whitespace allowed
    Hex,
    /// Raw tile bytes
    Bin,
}

impl SpriteFormat {
    /// Pick the format from a file extension: `.bin`, `.2bpp` and `.chr` are
    /// raw bytes, everything else is hex text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("bin") | Some("2bpp") | Some("chr") => SpriteFormat::Bin,
            _ => SpriteFormat::Hex,
        }
    }
}

/// Serialize a grid in the given format.
///
/// Hex output ends with a newline so the file plays well with text tools;
/// the newline is whitespace and decodes away.
pub fn serialize(grid: &PixelGrid, format: SpriteFormat, separator: Separator) -> Vec<u8> {
    match format {
        SpriteFormat::Hex => {
            let mut text = codec::encode(grid, separator);
            text.push('\n');
            text.into_bytes()
        }
        SpriteFormat::Bin => codec::to_bytes(grid),
    }
}

/// Load a sprite file into an existing sprite, keeping its dimensions.
pub fn load_sprite<R: Renderer>(
    sprite: &mut SpriteMut<'_, R>,
    path: &Path,
    format: SpriteFormat,
) -> Result<(), OutputError> {
    match format {
        SpriteFormat::Hex => sprite.decode(&fs::read_to_string(path)?)?,
        SpriteFormat::Bin => sprite.load_bytes(&fs::read(path)?)?,
    }
    log::debug!("loaded {} as {:?}", path.display(), format);
    Ok(())
}

/// Write a grid to a sprite file.
pub fn save_sprite(
    grid: &PixelGrid,
    path: &Path,
    format: SpriteFormat,
    separator: Separator,
) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    fs::write(path, serialize(grid, format, separator))?;
    Ok(())
}

/// Save an RGBA image to a PNG file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    image.save(path)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges for pixel art.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor, h * factor, FilterType::Nearest)
}

fn create_parent_dirs(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
