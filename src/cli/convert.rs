//! CLI dispatch for the `gbs new` and `gbs convert` commands.

use std::path::Path;
use std::process::ExitCode;

use crate::codec::{self, Separator};
use crate::output::SpriteFormat;
use crate::registry::SpriteHandle;

use super::{finish, Session, SpriteArgs, EXIT_INVALID_ARGS};

/// Execute the new command.
pub fn run_new(
    mut session: Session,
    width: usize,
    height: usize,
    output: Option<&Path>,
    separator: Option<Separator>,
) -> ExitCode {
    let result = session
        .registry
        .create_sprite(width, height)
        .map_err(|e| e.to_string())
        .and_then(|handle| emit(&session, handle, None, separator, output));
    finish(result)
}

/// Execute the convert command.
pub fn run_convert(
    mut session: Session,
    sprite: &SpriteArgs,
    to: Option<SpriteFormat>,
    separator: Option<Separator>,
    output: Option<&Path>,
) -> ExitCode {
    if output.is_none() && to == Some(SpriteFormat::Bin) {
        eprintln!("Error: --to bin needs an output file (-o)");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let result = session.load(sprite).and_then(|handle| emit(&session, handle, to, separator, output));
    finish(result)
}

/// Write to `output`, or print hex to stdout when there is none.
fn emit(
    session: &Session,
    handle: SpriteHandle,
    to: Option<SpriteFormat>,
    separator: Option<Separator>,
    output: Option<&Path>,
) -> Result<(), String> {
    match output {
        Some(path) => {
            let format = to.unwrap_or_else(|| SpriteFormat::from_path(path));
            session.save(handle, path, format, separator)?;
            eprintln!("Wrote: {}", path.display());
            Ok(())
        }
        None => {
            let grid = session.registry.get(handle).map_err(|e| e.to_string())?;
            let separator = separator.unwrap_or(session.config.encode.separator);
            println!("{}", codec::encode(grid, separator));
            Ok(())
        }
    }
}
