//! Binary entry point for the `rz` command-line tool.
//!
//! Parses arguments, applies the verbosity flags to the global display
//! level, and dispatches to the batch driver. Per-file failures inside a
//! batch are already reported by the driver; they surface here only as a
//! non-zero exit code.

use clap::Parser;

use rz::cli::args::{Cli, Command};
use rz::displaylevel;
use rz::io::{run, Direction};

fn main() {
    let cli = Cli::parse();
    cli.apply_verbosity();

    let (direction, op) = match &cli.command {
        Command::Compress(op) => (Direction::Compress, op),
        Command::Decompress(op) => (Direction::Decompress, op),
    };

    let exit_code = match run(direction, op) {
        Ok(0) => 0,
        Ok(missed) => {
            displaylevel!(1, "rz: {} file(s) could not be processed\n", missed);
            1
        }
        Err(e) => {
            eprintln!("rz: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}
