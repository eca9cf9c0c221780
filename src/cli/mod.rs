//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod convert;
mod edit;
mod render;
mod show;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, GbsConfig};
use crate::codec::Separator;
use crate::output::{self, SpriteFormat};
use crate::registry::{SpriteHandle, SpriteRegistry};
use crate::renderer::LogRenderer;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Gbsprite - edit and convert 2bpp tile sprites
#[derive(Parser)]
#[command(name = "gbs")]
#[command(about = "Gbsprite - edit and convert 2bpp 8x8 tile sprites (hex text or raw bytes)")]
#[command(version)]
pub struct Cli {
    /// Path to gbs.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every sprite change to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// A sprite file plus the dimensions it was saved with.
///
/// The tile format carries no header, so the size always comes from the caller.
#[derive(Args, Debug, Clone)]
pub struct SpriteArgs {
    /// Sprite file (hex text, or raw bytes for .bin/.2bpp/.chr)
    pub input: PathBuf,

    /// Width in pixels (multiple of 8)
    #[arg(short = 'W', long)]
    pub width: usize,

    /// Height in pixels (multiple of 8)
    #[arg(short = 'H', long)]
    pub height: usize,

    /// Input format (default: from the file extension)
    #[arg(long, value_enum)]
    pub format: Option<SpriteFormat>,
}

impl SpriteArgs {
    fn format(&self) -> SpriteFormat {
        self.format.unwrap_or_else(|| SpriteFormat::from_path(&self.input))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a blank sprite
    New {
        /// Width in pixels (multiple of 8)
        #[arg(short = 'W', long)]
        width: usize,

        /// Height in pixels (multiple of 8)
        #[arg(short = 'H', long)]
        height: usize,

        /// Output file (default: print hex to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Byte separator for hex output (default: from gbs.toml)
        #[arg(long, value_enum)]
        separator: Option<Separator>,
    },

    /// Convert a sprite between hex text and raw bytes
    Convert {
        #[command(flatten)]
        sprite: SpriteArgs,

        /// Output format (default: from the output extension, or hex)
        #[arg(long, value_enum)]
        to: Option<SpriteFormat>,

        /// Byte separator for hex output (default: from gbs.toml)
        #[arg(long, value_enum)]
        separator: Option<Separator>,

        /// Output file (default: print hex to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a sprite to the terminal
    Show {
        #[command(flatten)]
        sprite: SpriteArgs,

        /// Print color indices instead of colored blocks
        #[arg(long)]
        plain: bool,

        /// Print the grid as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Set one pixel to a color index
    Paint {
        #[command(flatten)]
        sprite: SpriteArgs,

        /// Column
        #[arg(short)]
        x: usize,

        /// Row
        #[arg(short)]
        y: usize,

        /// Color index (0-3)
        #[arg(short, long)]
        color: u8,

        /// Output file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Change a sprite's dimensions, keeping the top-left pixels
    Resize {
        #[command(flatten)]
        sprite: SpriteArgs,

        /// New width in pixels (multiple of 8)
        #[arg(long)]
        to_width: usize,

        /// New height in pixels (multiple of 8)
        #[arg(long)]
        to_height: usize,

        /// Allow shrinking that drops non-black pixels
        #[arg(long)]
        force: bool,

        /// Output file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a sprite to PNG through the palette
    Render {
        #[command(flatten)]
        sprite: SpriteArgs,

        /// Output PNG (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale output by integer factor (default: from gbs.toml)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=32))]
        scale: Option<u32>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = match Session::open(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command {
        Commands::New { width, height, output, separator } => {
            convert::run_new(session, width, height, output.as_deref(), separator)
        }
        Commands::Convert { sprite, to, separator, output } => {
            convert::run_convert(session, &sprite, to, separator, output.as_deref())
        }
        Commands::Show { sprite, plain, json } => show::run_show(session, &sprite, plain, json),
        Commands::Paint { sprite, x, y, color, output } => {
            edit::run_paint(session, &sprite, x, y, color, output.as_deref())
        }
        Commands::Resize { sprite, to_width, to_height, force, output } => {
            edit::run_resize(session, &sprite, to_width, to_height, force, output.as_deref())
        }
        Commands::Render { sprite, output, scale } => {
            render::run_render(session, &sprite, output.as_deref(), scale)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Loaded config plus a registry whose renderer logs every change.
pub(crate) struct Session {
    pub config: GbsConfig,
    pub registry: SpriteRegistry<LogRenderer>,
}

impl Session {
    fn open(config_path: Option<&Path>) -> Result<Self, String> {
        let config = load_config(config_path).map_err(|e| e.to_string())?;
        let palette = config.palette().map_err(|e| e.to_string())?;
        Ok(Self { config, registry: SpriteRegistry::with_palette(palette, LogRenderer) })
    }

    /// Create a sprite of the given size and fill it from the input file.
    fn load(&mut self, args: &SpriteArgs) -> Result<SpriteHandle, String> {
        let handle = self.registry.create_sprite(args.width, args.height).map_err(|e| e.to_string())?;
        let mut sprite = self.registry.get_mut(handle).map_err(|e| e.to_string())?;
        output::load_sprite(&mut sprite, &args.input, args.format())
            .map_err(|e| format!("cannot load '{}': {}", args.input.display(), e))?;
        Ok(handle)
    }

    /// Write a sprite; the format follows the target's extension.
    fn save(
        &self,
        handle: SpriteHandle,
        path: &Path,
        format: SpriteFormat,
        separator: Option<Separator>,
    ) -> Result<(), String> {
        let grid = self.registry.get(handle).map_err(|e| e.to_string())?;
        let separator = separator.unwrap_or(self.config.encode.separator);
        output::save_sprite(grid, path, format, separator)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))
    }
}

/// Map a command result to an exit code, printing the error.
pub(crate) fn finish(result: Result<(), String>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resize() {
        let cli = Cli::try_parse_from([
            "gbs", "resize", "hero.hex", "-W", "16", "-H", "8", "--to-width", "8", "--to-height",
            "8", "--force",
        ])
        .unwrap();
        match cli.command {
            Commands::Resize { sprite, to_width, to_height, force, output } => {
                assert_eq!(sprite.input, PathBuf::from("hero.hex"));
                assert_eq!((sprite.width, sprite.height), (16, 8));
                assert_eq!((to_width, to_height), (8, 8));
                assert!(force);
                assert!(output.is_none());
            }
            _ => panic!("expected resize"),
        }
    }

    #[test]
    fn test_sprite_args_format_detection() {
        let cli = Cli::try_parse_from(["gbs", "show", "tiles.2bpp", "-W", "8", "-H", "8"]).unwrap();
        let Commands::Show { sprite, .. } = cli.command else { panic!("expected show") };
        assert_eq!(sprite.format(), SpriteFormat::Bin);

        let cli = Cli::try_parse_from([
            "gbs", "show", "tiles.2bpp", "-W", "8", "-H", "8", "--format", "hex",
        ])
        .unwrap();
        let Commands::Show { sprite, .. } = cli.command else { panic!("expected show") };
        assert_eq!(sprite.format(), SpriteFormat::Hex);
    }

    #[test]
    fn test_render_scale_range() {
        let args = ["gbs", "render", "a.hex", "-W", "8", "-H", "8", "--scale", "0"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
