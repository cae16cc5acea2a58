// rz — run-length and window-bounded LZ codecs with a file-driving harness.

use std::fmt;

pub mod cli;
pub mod detect;
pub mod io;
pub mod lz;
pub mod rle;
pub mod util;

// ── Version constants ─────────────────────────────────────────────────────────
pub const RZ_VERSION_MAJOR: u32 = 0;
pub const RZ_VERSION_MINOR: u32 = 1;
pub const RZ_VERSION_RELEASE: u32 = 0;
pub const RZ_VERSION_NUMBER: u32 =
    RZ_VERSION_MAJOR * 100 * 100 + RZ_VERSION_MINOR * 100 + RZ_VERSION_RELEASE;
pub const RZ_VERSION_STRING: &str = "0.1.0";

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    RZ_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    RZ_VERSION_STRING
}

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by the codec operations.
///
/// Both codecs deliberately perform no structural validation of their encoded
/// payloads: truncated streams, zero counts, and out-of-range back-references
/// decode to unspecified bytes rather than a reported error. The only error
/// kind is `InvalidInput`, raised where dynamic input can still be wrong
/// (the buffer type itself is guaranteed by `&[u8]` at compile time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The argument is not acceptable input for the operation.
    InvalidInput,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidInput => write!(f, "invalid input"),
        }
    }
}

impl std::error::Error for CodecError {}

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm selector
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies one of the two interchangeable codecs.
///
/// Both codecs satisfy the same contract: a whole buffer in, a whole buffer
/// out, no shared state between calls. Selection is either explicit (CLI
/// `--algo`) or derived from a file extension via [`detect::best_algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AlgorithmId {
    /// Run-length encoding: `[value, count]` pairs over maximal runs.
    Rle,
    /// Window-bounded match encoding: literals and back-references into a
    /// 20-byte trailing window.
    Lz,
}

impl AlgorithmId {
    /// Compress `data` with the selected codec.
    pub fn compress(self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            AlgorithmId::Rle => rle::compress(data),
            AlgorithmId::Lz => lz::compress(data),
        }
    }

    /// Decompress `data` with the selected codec.
    pub fn decompress(self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            AlgorithmId::Rle => rle::decompress(data),
            AlgorithmId::Lz => lz::decompress(data),
        }
    }

    /// Short lowercase name, as accepted by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::Rle => "rle",
            AlgorithmId::Lz => "lz",
        }
    }
}

impl std::str::FromStr for AlgorithmId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rle" => Ok(AlgorithmId::Rle),
            "lz" | "lz77" => Ok(AlgorithmId::Lz),
            _ => Err(CodecError::InvalidInput),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use lz::{compress as lz_compress, decompress as lz_decompress};
pub use rle::{compress as rle_compress, decompress as rle_decompress};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algo in [AlgorithmId::Rle, AlgorithmId::Lz] {
            assert_eq!(algo.name().parse::<AlgorithmId>().unwrap(), algo);
        }
        assert_eq!("lz77".parse::<AlgorithmId>().unwrap(), AlgorithmId::Lz);
    }

    #[test]
    fn unknown_algorithm_is_invalid_input() {
        assert_eq!(
            "huffman".parse::<AlgorithmId>().unwrap_err(),
            CodecError::InvalidInput
        );
    }

    #[test]
    fn dispatch_matches_module_functions() {
        let data = b"AAABBBCCC";
        assert_eq!(
            AlgorithmId::Rle.compress(data).unwrap(),
            rle::compress(data).unwrap()
        );
        assert_eq!(
            AlgorithmId::Lz.compress(data).unwrap(),
            lz::compress(data).unwrap()
        );
    }

    #[test]
    fn version_number_matches_string() {
        assert_eq!(version_number(), 100);
        assert_eq!(version_string(), "0.1.0");
    }
}
