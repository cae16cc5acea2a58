//! Batch driver: applies one codec to a list of files or directory trees.
//!
//! Each file is an independent job — read, transform, write — so the batch
//! runs them in parallel with rayon; the codecs are pure functions with no
//! shared state, and the overwrite policy is per destination file. A failing
//! file is reported and counted but does not stop the rest of the batch; the
//! caller turns a non-zero miss count into a non-zero exit code.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use rayon::prelude::*;

use crate::cli::args::OpArgs;
use crate::cli::constants::{OUT_EXTENSION, RZ_EXTENSION};
use crate::displaylevel;
use crate::io::file_io::{read_src_file, write_dst_file};
use crate::util::create_file_list;
use crate::{detect, AlgorithmId};

/// Which way the codec is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Direction::Compress => "compress",
            Direction::Decompress => "decompress",
        }
    }

    fn done(self) -> &'static str {
        match self {
            Direction::Compress => "compressed",
            Direction::Decompress => "decompressed",
        }
    }
}

/// Derive the sibling output name for `src`.
///
/// Compression appends `.rz`; decompression strips a `.rz` suffix, falling
/// back to appending `.out` when the input is not named that way.
pub fn output_name(direction: Direction, src: &Path) -> PathBuf {
    match direction {
        Direction::Compress => append_suffix(src, RZ_EXTENSION),
        Direction::Decompress => match src.to_str().and_then(|s| s.strip_suffix(RZ_EXTENSION)) {
            Some(base) if !base.is_empty() => PathBuf::from(base),
            _ => append_suffix(src, OUT_EXTENSION),
        },
    }
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Apply the codec to one file.
///
/// `algo` is the explicit `--algo` choice; when absent the codec is picked
/// per file from the extension heuristic.
pub fn process_file(
    direction: Direction,
    algo: Option<AlgorithmId>,
    src: &Path,
    dst: &Path,
    force: bool,
) -> Result<()> {
    let algo = algo.unwrap_or_else(|| detect::best_algorithm(src));
    let data =
        read_src_file(src).with_context(|| format!("reading {}", src.display()))?;
    let transformed = match direction {
        Direction::Compress => algo.compress(&data),
        Direction::Decompress => algo.decompress(&data),
    }
    .with_context(|| format!("{} {} with {}", direction.verb(), src.display(), algo))?;
    write_dst_file(dst, &transformed, force)
        .with_context(|| format!("writing {}", dst.display()))?;
    displaylevel!(
        2,
        "{}: {} -> {} ({} -> {} bytes, {})\n",
        direction.done(),
        src.display(),
        dst.display(),
        data.len(),
        transformed.len(),
        algo
    );
    Ok(())
}

/// Run one batch operation over the paths named on the command line.
///
/// Returns the number of files that failed; the batch itself only errors on
/// conditions that invalidate the whole run (unreadable directory walk,
/// empty input set, `--output` with more than one input).
pub fn run(direction: Direction, args: &OpArgs) -> Result<usize> {
    let files = create_file_list(&args.paths).context("expanding input paths")?;
    ensure!(!files.is_empty(), "no input files found");

    if let Some(output) = &args.output {
        ensure!(
            files.len() == 1,
            "--output requires exactly one input file, got {}",
            files.len()
        );
        process_file(direction, args.algo, &files[0], output, args.force)?;
        return Ok(0);
    }

    let missed = files
        .par_iter()
        .filter(|&src| {
            let dst = output_name(direction, src);
            match process_file(direction, args.algo, src, &dst, args.force) {
                Ok(()) => false,
                Err(e) => {
                    displaylevel!(1, "rz: {:#}\n", e);
                    true
                }
            }
        })
        .count();
    Ok(missed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn compress_name_appends_rz() {
        assert_eq!(
            output_name(Direction::Compress, Path::new("dir/file.txt")),
            PathBuf::from("dir/file.txt.rz")
        );
    }

    #[test]
    fn decompress_name_strips_rz() {
        assert_eq!(
            output_name(Direction::Decompress, Path::new("dir/file.txt.rz")),
            PathBuf::from("dir/file.txt")
        );
    }

    #[test]
    fn decompress_name_falls_back_to_out() {
        assert_eq!(
            output_name(Direction::Decompress, Path::new("file.bin")),
            PathBuf::from("file.bin.out")
        );
        // ".rz" alone would strip to nothing; fall back as well.
        assert_eq!(
            output_name(Direction::Decompress, Path::new(".rz")),
            PathBuf::from(".rz.out")
        );
    }

    #[test]
    fn process_file_round_trips_on_disk() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("input.txt");
        let packed = dir.path().join("input.txt.rz");
        let unpacked = dir.path().join("roundtrip.txt");
        fs::write(&src, b"banana banana banana").unwrap();

        process_file(Direction::Compress, None, &src, &packed, false).unwrap();
        process_file(Direction::Decompress, None, &packed, &unpacked, false).unwrap();
        assert_eq!(fs::read(&unpacked).unwrap(), b"banana banana banana");
    }

    #[test]
    fn run_counts_missing_files_but_continues() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, b"aaaaaaaa").unwrap();
        let args = OpArgs {
            paths: vec![good.clone(), dir.path().join("absent.txt")],
            algo: Some(AlgorithmId::Rle),
            output: None,
            force: false,
        };
        crate::cli::constants::set_display_level(0);
        let missed = run(Direction::Compress, &args).unwrap();
        assert_eq!(missed, 1);
        assert!(good.with_extension("txt.rz").exists());
    }

    #[test]
    fn run_rejects_output_with_multiple_inputs() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"b").unwrap();
        let args = OpArgs {
            paths: vec![a, b],
            algo: None,
            output: Some(dir.path().join("out.rz")),
            force: false,
        };
        assert!(run(Direction::Compress, &args).is_err());
    }
}
