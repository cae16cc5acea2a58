//! Command-line argument surface for the `rz` binary.
//!
//! Two subcommands with an identical shape: `compress` and `decompress`.
//! Positional arguments are files or directories; directories are expanded
//! recursively by the I/O layer. When `--algo` is omitted the codec is chosen
//! per file from its extension (see [`crate::detect`]).

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::cli::constants::{display_level, set_display_level};
use crate::AlgorithmId;

/// Top-level parser for the `rz` binary.
#[derive(Debug, Parser)]
#[command(name = "rz", version, about = "Run-length / LZ file compressor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (may be repeated).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress files or directory trees.
    Compress(OpArgs),
    /// Decompress files or directory trees.
    Decompress(OpArgs),
}

/// Arguments shared by both operations.
#[derive(Debug, Args)]
pub struct OpArgs {
    /// Input files or directories (directories are walked recursively).
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Codec to use; default is a per-file choice based on the extension.
    #[arg(long, value_enum, value_name = "CODEC")]
    pub algo: Option<AlgorithmId>,

    /// Write to FILE instead of the derived sibling name.
    /// Only valid with a single input file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite existing destination files.
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Apply `-q`/`-v` to the global display level.
    pub fn apply_verbosity(&self) {
        if self.quiet {
            set_display_level(1);
        } else if self.verbose > 0 {
            set_display_level(display_level() + self.verbose as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).expect("argv should parse")
    }

    #[test]
    fn compress_with_explicit_algo() {
        let cli = parse(&["rz", "compress", "--algo", "rle", "a.bin"]);
        let Command::Compress(op) = cli.command else {
            panic!("expected compress subcommand");
        };
        assert_eq!(op.algo, Some(AlgorithmId::Rle));
        assert_eq!(op.paths, vec![PathBuf::from("a.bin")]);
        assert!(!op.force);
    }

    #[test]
    fn decompress_defaults_to_detection() {
        let cli = parse(&["rz", "decompress", "a.rz", "b.rz"]);
        let Command::Decompress(op) = cli.command else {
            panic!("expected decompress subcommand");
        };
        assert_eq!(op.algo, None);
        assert_eq!(op.paths.len(), 2);
    }

    #[test]
    fn output_and_force_flags() {
        let cli = parse(&["rz", "compress", "-f", "-o", "out.rz", "a.txt"]);
        let Command::Compress(op) = cli.command else {
            panic!("expected compress subcommand");
        };
        assert!(op.force);
        assert_eq!(op.output, Some(PathBuf::from("out.rz")));
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["rz", "compress"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["rz", "-q", "-v", "compress", "a"]).is_err());
    }
}
