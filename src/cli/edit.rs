//! CLI dispatch for the `gbs paint` and `gbs resize` commands.
//!
//! Both rewrite the input file unless `-o` is given. The written file keeps
//! the input's format unless the output extension says otherwise.

use std::path::Path;
use std::process::ExitCode;

use crate::output::SpriteFormat;
use crate::registry::SpriteHandle;

use super::{finish, Session, SpriteArgs, EXIT_ERROR};

/// Execute the paint command.
pub fn run_paint(
    mut session: Session,
    sprite: &SpriteArgs,
    x: usize,
    y: usize,
    color: u8,
    output: Option<&Path>,
) -> ExitCode {
    finish(paint(&mut session, sprite, x, y, color, output))
}

fn paint(
    session: &mut Session,
    sprite: &SpriteArgs,
    x: usize,
    y: usize,
    color: u8,
    output: Option<&Path>,
) -> Result<(), String> {
    let handle = session.load(sprite)?;
    session.registry.set_current_paint_color(color).map_err(|e| e.to_string())?;
    session.registry.paint_cell(handle, x, y).map_err(|e| e.to_string())?;
    write_back(session, sprite, handle, output)
}

/// Execute the resize command.
///
/// Shrinking that would drop non-zero pixels is refused unless `force` is set.
pub fn run_resize(
    mut session: Session,
    sprite: &SpriteArgs,
    to_width: usize,
    to_height: usize,
    force: bool,
    output: Option<&Path>,
) -> ExitCode {
    let handle = match session.load(sprite) {
        Ok(h) => h,
        Err(e) => return finish(Err(e)),
    };

    let discards = match session.registry.get(handle) {
        Ok(grid) => grid.would_discard(to_width, to_height),
        Err(e) => return finish(Err(e.to_string())),
    };
    if discards && !force {
        eprintln!(
            "Error: resizing {}x{} -> {}x{} would discard drawn pixels; rerun with --force",
            sprite.width, sprite.height, to_width, to_height
        );
        return ExitCode::from(EXIT_ERROR);
    }

    finish(resize(&mut session, sprite, handle, to_width, to_height, output))
}

fn resize(
    session: &mut Session,
    sprite: &SpriteArgs,
    handle: SpriteHandle,
    to_width: usize,
    to_height: usize,
    output: Option<&Path>,
) -> Result<(), String> {
    let mut target = session.registry.get_mut(handle).map_err(|e| e.to_string())?;
    target.resize(to_width, to_height).map_err(|e| e.to_string())?;
    write_back(session, sprite, handle, output)
}

fn write_back(
    session: &Session,
    sprite: &SpriteArgs,
    handle: SpriteHandle,
    output: Option<&Path>,
) -> Result<(), String> {
    let (path, format) = match output {
        Some(path) => (path, SpriteFormat::from_path(path)),
        None => (sprite.input.as_path(), sprite.format()),
    };
    session.save(handle, path, format, None)?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}
