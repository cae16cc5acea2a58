//! Per-file codec selection.
//!
//! A pure function of the path — no filesystem access, no ambient state.
//! The heuristic only looks at the extension: text-like formats tend to carry
//! repeated substrings the window codec can back-reference, while flat binary
//! and uncompressed-bitmap formats tend to carry long byte runs that favor
//! run-length encoding.

use std::ffi::OsStr;
use std::path::Path;

use crate::AlgorithmId;

/// Pick the codec expected to do better on `path`, from its extension alone.
///
/// Unknown or missing extensions default to the window codec.
pub fn best_algorithm(path: &Path) -> AlgorithmId {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        // Text formats: repeated substrings favor the window codec.
        Some("txt" | "log" | "md" | "csv" | "json" | "xml" | "html" | "css" | "js") => {
            AlgorithmId::Lz
        }
        // Flat binary formats: long runs of identical bytes favor RLE.
        Some("bin" | "dat" | "exe" | "dll") => AlgorithmId::Rle,
        // Uncompressed images: large single-color areas favor RLE.
        Some("bmp" | "tga" | "raw") => AlgorithmId::Rle,
        _ => AlgorithmId::Lz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_extensions_select_lz() {
        for name in ["notes.txt", "build.log", "README.md", "data.json"] {
            assert_eq!(best_algorithm(Path::new(name)), AlgorithmId::Lz);
        }
    }

    #[test]
    fn binary_extensions_select_rle() {
        for name in ["blob.bin", "table.dat", "tool.exe", "plugin.dll"] {
            assert_eq!(best_algorithm(Path::new(name)), AlgorithmId::Rle);
        }
    }

    #[test]
    fn image_extensions_select_rle() {
        for name in ["photo.bmp", "sprite.tga", "frame.raw"] {
            assert_eq!(best_algorithm(Path::new(name)), AlgorithmId::Rle);
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(best_algorithm(Path::new("REPORT.TXT")), AlgorithmId::Lz);
        assert_eq!(best_algorithm(Path::new("IMAGE.BMP")), AlgorithmId::Rle);
    }

    #[test]
    fn unknown_or_missing_extension_defaults_to_lz() {
        assert_eq!(best_algorithm(Path::new("archive.xyz")), AlgorithmId::Lz);
        assert_eq!(best_algorithm(Path::new("Makefile")), AlgorithmId::Lz);
    }
}
