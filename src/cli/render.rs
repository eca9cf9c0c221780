//! CLI dispatch for the `gbs render` command.

use std::path::Path;
use std::process::ExitCode;

use crate::output::{save_png, scale_image};
use crate::renderer::render_grid;

use super::{finish, Session, SpriteArgs};

/// Execute the render command.
pub fn run_render(
    mut session: Session,
    sprite: &SpriteArgs,
    output: Option<&Path>,
    scale: Option<u32>,
) -> ExitCode {
    let target = output.map(Path::to_path_buf).unwrap_or_else(|| sprite.input.with_extension("png"));
    let scale = scale.unwrap_or(session.config.render.scale);

    let result = session.load(sprite).and_then(|handle| {
        let grid = session.registry.get(handle).map_err(|e| e.to_string())?;
        let image = scale_image(render_grid(grid, session.registry.palette()), scale);
        save_png(&image, &target).map_err(|e| format!("cannot write '{}': {}", target.display(), e))?;
        eprintln!("Saved: {} ({}x{})", target.display(), image.width(), image.height());
        Ok(())
    });
    finish(result)
}
