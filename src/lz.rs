//! Window-bounded match codec.
//!
//! A minimal LZ77 variant. Each source position is encoded either as a
//! literal record `0x00 value` (2 bytes) or as a back-reference record
//! `0x01 offset length` (3 bytes) into a trailing window of at most
//! [`WINDOW_SIZE`] already-emitted source bytes. The encoded stream is flat:
//! no header, no length prefix, no checksum — record boundaries follow from
//! the leading tag byte alone.
//!
//! The encoder is a bounded brute-force search: O(n × WINDOW_SIZE) time.
//! The decoder copies matches from the output it is still producing, one
//! byte at a time in forward order, which is what lets `offset < length`
//! reproduce periodic patterns.
//!
//! Like the run-length codec, the decoder performs no structural validation:
//! a back-reference reaching before the start of the output decodes as zero
//! bytes, a truncated trailing record is dropped, and an unknown tag byte is
//! skipped. Corrupt input yields garbage, not an error.

use crate::CodecError;

/// Maximum lookback distance, and the largest representable offset.
pub const WINDOW_SIZE: usize = 20;

/// Longest match representable in a single record (the length is one byte).
pub const MAX_MATCH_LEN: usize = 255;

/// Shortest match worth encoding. A match record costs 3 bytes, so encoding
/// fewer than 3 source bytes as a match would expand the data.
const MIN_MATCH_LEN: usize = 3;

/// Record tag: a literal byte follows.
pub const TAG_LITERAL: u8 = 0x00;

/// Record tag: an offset/length pair follows.
pub const TAG_MATCH: u8 = 0x01;

/// One record of the encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(u8),
    Match { offset: u8, length: u8 },
}

impl Token {
    fn emit(self, out: &mut Vec<u8>) {
        match self {
            Token::Literal(value) => out.extend_from_slice(&[TAG_LITERAL, value]),
            Token::Match { offset, length } => {
                out.extend_from_slice(&[TAG_MATCH, offset, length])
            }
        }
    }
}

/// Compress `input` into a stream of literal and back-reference records.
///
/// At each cursor position the encoder scans candidate match starts in
/// `[i - WINDOW_SIZE, i)` from the back of the window forward, extending each
/// candidate while bytes agree (capped at [`MAX_MATCH_LEN`] and the end of
/// the input). The longest match wins; among equal lengths the candidate
/// scanned first — the one farthest back — is kept, since only a strictly
/// longer match displaces the current best. Matches shorter than 3 bytes are
/// rejected in favor of a literal.
///
/// Empty input encodes to an empty buffer; a single byte always becomes one
/// literal record.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < input.len() {
        let window_start = i.saturating_sub(WINDOW_SIZE);
        let mut best_offset = 0;
        let mut best_len = 0;
        for j in window_start..i {
            let mut len = 0;
            while i + len < input.len()
                && input[j + len] == input[i + len]
                && len < MAX_MATCH_LEN
            {
                len += 1;
            }
            // Strictly longer only: equal-length candidates closer to the
            // cursor never replace an earlier match.
            if len > best_len {
                best_len = len;
                best_offset = i - j;
            }
        }
        if best_len >= MIN_MATCH_LEN {
            Token::Match {
                offset: best_offset as u8,
                length: best_len as u8,
            }
            .emit(&mut out);
            i += best_len;
        } else {
            Token::Literal(input[i]).emit(&mut out);
            i += 1;
        }
    }
    Ok(out)
}

/// Expand a stream of literal and back-reference records.
///
/// Records are dispatched on their leading tag byte. A match copies `length`
/// bytes from the already-produced output, starting `offset` bytes behind the
/// write position, one byte at a time — bytes written earlier in the same
/// record are legal sources, so `offset < length` reproduces repeating
/// patterns.
///
/// A reference reaching before the start of the output (offset of zero, or
/// larger than the bytes produced so far) yields `0x00` for that byte; once
/// the output has grown enough the copy resumes from real data. This mirrors
/// the unvalidated-read behavior of the original format rather than
/// reporting an error.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            TAG_LITERAL if i + 1 < input.len() => {
                out.push(input[i + 1]);
                i += 2;
            }
            TAG_MATCH if i + 2 < input.len() => {
                let offset = input[i + 1] as usize;
                let length = input[i + 2] as usize;
                for _ in 0..length {
                    let byte = if offset >= 1 && offset <= out.len() {
                        out[out.len() - offset]
                    } else {
                        0
                    };
                    out.push(byte);
                }
                i += 3;
            }
            // Truncated trailing record, or a tag that is neither literal
            // nor match: skip a byte and keep going. Garbage in, garbage out.
            _ => i += 1,
        }
    }
    Ok(out)
}
