//! Expansion of mixed file/directory arguments into a flat list of files.
//!
//! Directories are walked recursively with [`walkdir`]; symlinks are never
//! followed (`walkdir`'s default), so cyclic links cannot loop the walk and
//! symlink entries inside a tree are skipped. The result is sorted so batch
//! runs process files in a stable order regardless of filesystem iteration.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Flatten `inputs` into regular files.
///
/// - A path that is not a directory is forwarded unchanged; whether it exists
///   is the caller's problem (the subsequent open reports it).
/// - A directory contributes every regular file beneath it, recursively.
/// - An unreadable directory entry aborts the walk with an `io::Error`.
pub fn create_file_list(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_dir(input, &mut files)?;
        } else {
            files.push(input.clone());
        }
    }
    files.sort();
    Ok(files)
}

fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            e.io_error()
                .map(|io_err| io::Error::new(io_err.kind(), e.to_string()))
                .unwrap_or_else(|| io::Error::other(e.to_string()))
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested/deep")).unwrap();
        fs::write(root.join("b.txt"), b"b").unwrap();
        fs::write(root.join("nested/a.txt"), b"a").unwrap();
        fs::write(root.join("nested/deep/c.bin"), b"c").unwrap();
        dir
    }

    #[test]
    fn walks_directories_recursively() {
        let dir = make_tree();
        let files = create_file_list(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn result_is_sorted() {
        let dir = make_tree();
        let files = create_file_list(&[dir.path().to_path_buf()]).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn plain_files_pass_through() {
        let dir = make_tree();
        let file = dir.path().join("b.txt");
        let files = create_file_list(&[file.clone()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn missing_path_is_forwarded_not_rejected() {
        let files = create_file_list(&[PathBuf::from("/no/such/file")]).unwrap();
        assert_eq!(files, vec![PathBuf::from("/no/such/file")]);
    }

    #[test]
    fn mixed_files_and_directories() {
        let dir = make_tree();
        let inputs = vec![dir.path().join("b.txt"), dir.path().join("nested")];
        let files = create_file_list(&inputs).unwrap();
        assert_eq!(files.len(), 3);
    }
}
