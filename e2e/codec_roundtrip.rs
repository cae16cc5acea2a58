// e2e/codec_roundtrip.rs — black-box codec contract tests.
//
// Exercises both codecs through the public library API only: round-trip
// correctness, the exact wire layouts, and the deliberately unvalidated
// handling of malformed streams.

use rz::{lz, rle, AlgorithmId};

fn roundtrip(algo: AlgorithmId, input: &[u8]) -> Vec<u8> {
    let encoded = algo.compress(input).expect("compress should succeed");
    algo.decompress(&encoded).expect("decompress should succeed")
}

// ── Round-trip across both codecs ─────────────────────────────────────────────

#[test]
fn both_codecs_round_trip_assorted_inputs() {
    let inputs: Vec<Vec<u8>> = vec![
        b"".to_vec(),
        b"A".to_vec(),
        b"AAAA".to_vec(),
        b"ABABABABABAB".to_vec(),
        b"the quick brown fox jumps over the lazy dog".to_vec(),
        vec![0u8; 1000],
        (0..=255u8).collect(),
        (0..=255u8).cycle().take(4096).collect(),
        b"abcabcabcabcabcabc".repeat(50),
    ];
    for input in &inputs {
        for algo in [AlgorithmId::Rle, AlgorithmId::Lz] {
            assert_eq!(
                &roundtrip(algo, input),
                input,
                "{algo} round-trip failed for {} bytes",
                input.len()
            );
        }
    }
}

#[test]
fn empty_input_is_identity_for_both_codecs() {
    for algo in [AlgorithmId::Rle, AlgorithmId::Lz] {
        assert!(algo.compress(b"").unwrap().is_empty());
        assert!(algo.decompress(b"").unwrap().is_empty());
    }
}

// ── Exact wire layouts ────────────────────────────────────────────────────────

#[test]
fn rle_wire_format_for_aaaa() {
    let encoded = rle::compress(b"AAAA").unwrap();
    assert_eq!(encoded, vec![0x41, 0x04]);
    assert_eq!(rle::decompress(&encoded).unwrap(), b"AAAA");
}

#[test]
fn lz_wire_format_for_single_byte() {
    let encoded = lz::compress(b"A").unwrap();
    assert_eq!(encoded, vec![0x00, 0x41]);
    assert_eq!(lz::decompress(&encoded).unwrap(), b"A");
}

#[test]
fn lz_tags_are_stable() {
    // The tag bytes are the wire contract; a change would corrupt every
    // previously written file.
    assert_eq!(lz::TAG_LITERAL, 0x00);
    assert_eq!(lz::TAG_MATCH, 0x01);
    assert_eq!(lz::WINDOW_SIZE, 20);
}

// ── Run-split and threshold properties ───────────────────────────────────────

#[test]
fn rle_long_run_splits_into_ceil_records() {
    for n in [256usize, 510, 511, 1000] {
        let input = vec![0xEEu8; n];
        let encoded = rle::compress(&input).unwrap();
        let records = encoded.len() / 2;
        assert_eq!(records, n.div_ceil(255), "record count for n = {n}");
        let total: usize = encoded
            .chunks_exact(2)
            .map(|rec| rec[1] as usize)
            .sum();
        assert_eq!(total, n, "counts must sum to the run length");
        assert_eq!(rle::decompress(&encoded).unwrap(), input);
    }
}

#[test]
fn lz_two_byte_match_encodes_as_literals() {
    // "ABAB": the second "AB" is a length-2 candidate, under the 3-byte
    // threshold, so the whole input is literals.
    let encoded = lz::compress(b"ABAB").unwrap();
    assert_eq!(encoded.len(), 8);
    assert!(encoded.chunks_exact(2).all(|rec| rec[0] == lz::TAG_LITERAL));
}

#[test]
fn lz_offsets_stay_within_window_and_cursor() {
    let input: Vec<u8> = b"compress me, compress me again and again! "
        .iter()
        .cycle()
        .take(2000)
        .copied()
        .collect();
    let encoded = lz::compress(&input).unwrap();

    let mut i = 0;
    let mut consumed = 0usize; // source bytes reconstructed so far
    while i < encoded.len() {
        match encoded[i] {
            0x00 => {
                consumed += 1;
                i += 2;
            }
            0x01 => {
                let offset = encoded[i + 1] as usize;
                assert!(offset >= 1 && offset <= lz::WINDOW_SIZE);
                assert!(offset <= consumed, "offset may not reach before start");
                consumed += encoded[i + 2] as usize;
                i += 3;
            }
            other => panic!("unexpected tag {other:#04x}"),
        }
    }
    assert_eq!(consumed, input.len());
}

// ── Malformed input: garbage out, never an error ─────────────────────────────

#[test]
fn malformed_streams_decode_without_error() {
    // Odd-length RLE input: the trailing byte is ignored.
    assert_eq!(rle::decompress(&[b'X', 3, b'Y']).unwrap(), b"XXX");
    // Zero count: skipped.
    assert_eq!(rle::decompress(&[b'X', 0]).unwrap(), b"");
    // Out-of-range back-reference: zero bytes, not a panic.
    assert_eq!(lz::decompress(&[0x01, 20, 2]).unwrap(), vec![0, 0]);
    // Truncated trailing record: dropped.
    assert_eq!(lz::decompress(&[0x00, b'Q', 0x01, 1]).unwrap(), b"Q");
}

#[test]
fn lz_overlapping_reference_rebuilds_periodic_data() {
    // offset < length is legal and reproduces the period.
    let decoded = lz::decompress(&[0x00, b'a', 0x00, b'b', 0x01, 2, 6]).unwrap();
    assert_eq!(decoded, b"abababab");
}
