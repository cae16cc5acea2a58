//! Whole-file read and write primitives for the batch driver.
//!
//! Both codecs operate on whole in-memory buffers, so file I/O is a single
//! read-to-end and a single write-all. The destination side enforces the
//! overwrite policy: an existing file is refused unless the caller passed
//! `--force`.

use std::fs;
use std::io;
use std::path::Path;

/// Read an entire source file into memory.
///
/// Directories are rejected with [`io::ErrorKind::InvalidInput`]; the file
/// list expansion normally filters them out, but a direct path argument can
/// still name one.
pub fn read_src_file(path: &Path) -> io::Result<Vec<u8>> {
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path.display()),
        ));
    }
    fs::read(path)
}

/// Write an output buffer to `path`.
///
/// Refuses to clobber an existing file unless `force` is set, returning
/// [`io::ErrorKind::AlreadyExists`].
pub fn write_dst_file(path: &Path, data: &[u8], force: bool) -> io::Result<()> {
    if !force && path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; use --force to overwrite", path.display()),
        ));
    }
    fs::write(path, data)
}
