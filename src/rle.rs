//! Run-length codec.
//!
//! The encoded form is a flat sequence of two-byte records `[value, count]`,
//! one record per run of identical bytes. There is no header, length prefix,
//! or checksum; record boundaries follow purely from the fixed two-byte
//! layout, so the encoded length is always even.
//!
//! The decoder performs no structural validation (see the crate-level notes
//! on [`CodecError`]): a zero count expands to nothing and a trailing
//! unpaired byte is ignored. Feeding it anything other than well-formed
//! records produces garbage, not an error.
//!
//! [`CodecError`]: crate::CodecError

use crate::CodecError;

/// Longest run representable in a single record (the count is one byte).
pub const MAX_RUN_LEN: usize = 255;

/// Compress `input` into `[value, count]` run records.
///
/// Runs are maximal, scanned left to right. A run longer than
/// [`MAX_RUN_LEN`] is split into `ceil(n / 255)` consecutive records whose
/// counts sum to the run length, so round-trips hold for any input. Empty
/// input encodes to an empty buffer.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < input.len() {
        let value = input[i];
        // Cap the in-loop counter at MAX_RUN_LEN; a longer run simply
        // continues into the next record.
        let mut run = 1;
        while i + run < input.len() && input[i + run] == value && run < MAX_RUN_LEN {
            run += 1;
        }
        out.push(value);
        out.push(run as u8);
        i += run;
    }
    Ok(out)
}

/// Expand `[value, count]` records back into the original bytes.
///
/// Each record appends `value` exactly `count` times. A count of zero is
/// skipped silently. An odd-length input is not an error: the trailing byte
/// has no count and expands to nothing.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    for record in input.chunks_exact(2) {
        let (value, count) = (record[0], record[1]);
        out.extend(std::iter::repeat(value).take(count as usize));
    }
    Ok(out)
}
