//! gbs - command-line editor for 2bpp tile sprites

use std::process::ExitCode;

use gbsprite::cli;

fn main() -> ExitCode {
    cli::run()
}
