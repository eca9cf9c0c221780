//! CLI dispatch for the `gbs show` command.

use std::process::ExitCode;

use crate::terminal::{render_ansi_grid, render_coordinate_grid};

use super::{finish, Session, SpriteArgs};

/// Execute the show command.
pub fn run_show(mut session: Session, sprite: &SpriteArgs, plain: bool, json: bool) -> ExitCode {
    let result = session.load(sprite).and_then(|handle| {
        let grid = session.registry.get(handle).map_err(|e| e.to_string())?;
        if json {
            let text = serde_json::to_string_pretty(grid).map_err(|e| e.to_string())?;
            println!("{}", text);
        } else if plain {
            print!("{}", render_coordinate_grid(grid));
        } else {
            print!("{}", render_ansi_grid(grid, session.registry.palette()));
        }
        Ok(())
    });
    finish(result)
}
