//! Identity constants and the verbosity-gated display infrastructure shared
//! by the binary and the I/O layer.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "rz";

/// Suffix appended to compressed output files.
pub const RZ_EXTENSION: &str = ".rz";

/// Suffix appended on decompression when the input does not end in `.rz`.
pub const OUT_EXTENSION: &str = ".out";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = silent; 1 = errors only; 2 = normal per-file reporting; 3+ = verbose.
// A crate-level atomic so rayon workers can consult it without plumbing.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
