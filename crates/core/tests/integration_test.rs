//! End-to-end tests for the huffpack codec public API.
//!
//! These exercise the full pipeline in both directions: count -> tree ->
//! codes -> header -> body, then marker check -> header parse -> tree
//! walk, with verification that output matches input bit-for-bit.

use huffpack_core::bitio::BitReader;
use huffpack_core::code::CodeTable;
use huffpack_core::error::{DecodeError, Error, FormatError};
use huffpack_core::freq::{count_frequencies, EOF_SYMBOL, SYMBOL_COUNT};
use huffpack_core::tree::build_tree;
use huffpack_core::{Codec, Verbosity};

#[test]
fn test_round_trip_text() {
    let codec = Codec::new();
    let input = b"the quick brown fox jumps over the lazy dog";

    let compressed = codec.compress(input).expect("compression failed");
    let restored = codec.decompress(&compressed).expect("decompression failed");

    assert_eq!(restored, input);
}

#[test]
fn test_round_trip_empty() {
    let codec = Codec::new();

    let compressed = codec.compress(b"").expect("compression failed");
    let restored = codec.decompress(&compressed).expect("decompression failed");

    assert!(restored.is_empty());
    // Marker (4 bytes) + tree header + the end marker's code: with all
    // 257 leaves in the header this sits well under 400 bytes.
    assert!(compressed.len() > 4);
    assert!(compressed.len() < 400);
}

#[test]
fn test_round_trip_single_byte() {
    let codec = Codec::new();
    let compressed = codec.compress(b"A").expect("compression failed");
    assert_eq!(codec.decompress(&compressed).unwrap(), b"A");
}

#[test]
fn test_round_trip_all_byte_values() {
    let codec = Codec::new();
    let input: Vec<u8> = (0..=255).collect();

    let compressed = codec.compress(&input).expect("compression failed");
    let restored = codec.decompress(&compressed).expect("decompression failed");

    assert_eq!(restored, input);
}

#[test]
fn test_round_trip_binary_with_repetition() {
    let codec = Codec::new();
    let mut input = Vec::new();
    for i in 0..4096u32 {
        input.push((i % 7) as u8);
        input.push((i * 31 % 251) as u8);
    }

    let compressed = codec.compress(&input).expect("compression failed");
    let restored = codec.decompress(&compressed).expect("decompression failed");

    assert_eq!(restored, input);
}

#[test]
fn test_skew_efficiency() {
    // 1000 repetitions of one byte: the body is near one bit per byte,
    // so header + body must come in far below the raw 8000 bits.
    let codec = Codec::new();
    let input = vec![b'a'; 1000];

    let (compressed, metrics) = codec
        .compress_with_metrics(&input)
        .expect("compression failed");

    assert!(
        compressed.len() < 600,
        "compressed to {} bytes, expected well under 1000",
        compressed.len()
    );
    assert!(metrics.body_bits < 2000, "body is {} bits", metrics.body_bits);
    assert!(metrics.compression_ratio().unwrap() < 0.75);

    let restored = codec.decompress(&compressed).expect("decompression failed");
    assert_eq!(restored, input);
}

#[test]
fn test_format_rejection() {
    let codec = Codec::new();
    let mut compressed = codec.compress(b"some payload").unwrap();

    // Flip the first marker bit.
    compressed[0] ^= 0x80;

    let result = codec.decompress(&compressed);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::BadMagic { .. }))
    ));
}

#[test]
fn test_arbitrary_stream_rejected() {
    let result = Codec::new().decompress(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::BadMagic { .. }))
    ));
}

#[test]
fn test_truncated_body() {
    let codec = Codec::new();
    let input = vec![b'a'; 1000];
    let compressed = codec.compress(&input).expect("compression failed");

    // Cut off the tail of the body, well past the header but before the
    // end marker's code.
    let truncated = &compressed[..compressed.len() - 60];

    let result = codec.decompress(truncated);
    assert!(matches!(
        result,
        Err(Error::Decode(DecodeError::MissingEndMarker { .. }))
    ));
}

#[test]
fn test_truncated_header() {
    let codec = Codec::new();
    let compressed = codec.compress(b"hello").unwrap();

    // Keep the marker plus a sliver of the header.
    let truncated = &compressed[..6];

    let result = codec.decompress(truncated);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::TruncatedHeader { .. }))
    ));
}

#[test]
fn test_code_table_covers_all_symbols() {
    // Regardless of which bytes occur, the table has all 257 entries.
    let mut reader = BitReader::new(b"only a few distinct bytes");
    let weights = count_frequencies(&mut reader).unwrap();
    let table = CodeTable::from_tree(&build_tree(&weights)).unwrap();

    assert_eq!(table.len(), SYMBOL_COUNT);
    assert_eq!(table.iter().count(), SYMBOL_COUNT);
}

#[test]
fn test_end_marker_weight_precedes_tree_build() {
    let mut reader = BitReader::new(b"");
    let weights = count_frequencies(&mut reader).unwrap();
    assert!(weights[EOF_SYMBOL as usize] >= 1);
}

#[test]
fn test_compressed_output_is_deterministic() {
    let codec = Codec::new();
    let input = b"determinism across runs and platforms".repeat(8);

    let a = codec.compress(&input).unwrap();
    let b = codec.compress(&input).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_verbose_codec_round_trips() {
    let codec = Codec::with_verbosity(Verbosity::High);
    let input = b"diagnostics never change bytes";

    let compressed = codec.compress(input).unwrap();
    assert_eq!(Codec::new().compress(input).unwrap(), compressed);
    assert_eq!(codec.decompress(&compressed).unwrap(), input);
}

#[test]
fn test_metrics_accounting() {
    let codec = Codec::new();
    let input = b"metrics are observational".repeat(20);

    let (compressed, metrics) = codec.compress_with_metrics(&input).unwrap();

    assert_eq!(metrics.input_bytes, input.len() as u64);
    assert_eq!(metrics.output_bytes, compressed.len() as u64);
    // header + body bits round up to the output byte count.
    let total_bits = metrics.header_bits + metrics.body_bits;
    assert_eq!(total_bits.div_ceil(8), compressed.len() as u64);

    let (restored, dmetrics) = codec.decompress_with_metrics(&compressed).unwrap();
    assert_eq!(restored, input);
    assert_eq!(dmetrics.output_bytes, input.len() as u64);
}
