//! Compress/decompress orchestration.
//!
//! # Compressed stream layout
//!
//! ```text
//! +---------------+----------------+------------------+-------------+
//! | marker (32b)  | tree header    | per-byte codes   | EOF code    |
//! +---------------+----------------+------------------+-------------+
//! ```
//!
//! No length field exists anywhere: the decoder stops when its tree walk
//! lands on the end-marker leaf. The final partial byte is zero-padded.
//!
//! Compression is two-pass: one pass counts frequencies, the reader is
//! rewound, and a second pass emits codes. Both operations build all
//! their state (tree, table) fresh and discard it on return.

use crate::bitio::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::error::{DecodeError, FormatError, Result};
use crate::freq::{count_frequencies, BITS_PER_WORD, EOF_SYMBOL};
use crate::header::{read_tree, write_tree, MAGIC, MAGIC_BITS};
use crate::metrics::CodecMetrics;
use crate::tree::{build_tree, Node};

/// Diagnostic verbosity. Advisory only: messages go to stderr and never
/// affect output bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No diagnostics
    #[default]
    Quiet,
    /// Coarse progress messages
    Low,
    /// Detailed structural messages
    High,
}

impl Verbosity {
    /// Map an integer debug level to a verbosity: 0 is quiet, 1-3 low,
    /// 4 and above high.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1..=3 => Verbosity::Low,
            _ => Verbosity::High,
        }
    }
}

/// Huffman compressor/decompressor.
///
/// Stateless apart from the verbosity setting; compress and decompress
/// are independent operations that share nothing across calls.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    verbosity: Verbosity,
}

impl Codec {
    /// Create a quiet codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the given diagnostic verbosity.
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Compress `input` into a self-describing stream.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress_with_metrics(input).map(|(out, _)| out)
    }

    /// Compress `input`, also returning byte/bit accounting.
    pub fn compress_with_metrics(&self, input: &[u8]) -> Result<(Vec<u8>, CodecMetrics)> {
        if self.verbosity >= Verbosity::Low {
            eprintln!("compress: {} input bytes", input.len());
        }

        let mut reader = BitReader::new(input);
        let weights = count_frequencies(&mut reader)?;
        let root = build_tree(&weights);
        let table = CodeTable::from_tree(&root)?;
        if self.verbosity >= Verbosity::High {
            eprintln!("compress: tree built, {} leaves", root.leaf_count());
        }

        let mut writer = BitWriter::new();
        writer.write_bits(u64::from(MAGIC), MAGIC_BITS)?;
        write_tree(&root, &mut writer)?;
        let header_bits = writer.bit_len() as u64;
        if self.verbosity >= Verbosity::High {
            eprintln!("compress: header written, {header_bits} bits");
        }

        // Second pass over the input, emitting one code per byte.
        reader.reset();
        while reader.bits_remaining() >= BITS_PER_WORD {
            let symbol = reader.read_bits(BITS_PER_WORD)? as u16;
            let code = table.get(symbol);
            writer.write_bits(code.bits, code.len as usize)?;
        }

        // Terminator, so the decoder needs no length field.
        let eof = table.get(EOF_SYMBOL);
        writer.write_bits(eof.bits, eof.len as usize)?;

        let body_bits = writer.bit_len() as u64 - header_bits;
        let output = writer.finish();
        if self.verbosity >= Verbosity::Low {
            eprintln!("compress: {} output bytes", output.len());
        }

        let metrics = CodecMetrics {
            input_bytes: input.len() as u64,
            output_bytes: output.len() as u64,
            header_bits,
            body_bits,
        };
        Ok((output, metrics))
    }

    /// Decompress a stream produced by [`Codec::compress`].
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompress_with_metrics(input).map(|(out, _)| out)
    }

    /// Decompress, also returning byte accounting.
    pub fn decompress_with_metrics(&self, input: &[u8]) -> Result<(Vec<u8>, CodecMetrics)> {
        let mut reader = BitReader::new(input);

        // Marker check comes before everything else; nothing is emitted
        // for a stream that is not ours.
        let marker = reader.read_bits(MAGIC_BITS)? as u32;
        if marker != MAGIC {
            return Err(FormatError::BadMagic {
                expected: MAGIC,
                actual: marker,
            }
            .into());
        }

        let root = read_tree(&mut reader)?;
        if self.verbosity >= Verbosity::High {
            eprintln!("decompress: tree parsed, {} leaves", root.leaf_count());
        }

        let output = self.decode_body(&root, &mut reader)?;
        if self.verbosity >= Verbosity::Low {
            eprintln!(
                "decompress: {} input bytes, {} output bytes",
                input.len(),
                output.len()
            );
        }

        let metrics = CodecMetrics {
            input_bytes: input.len() as u64,
            output_bytes: output.len() as u64,
            ..Default::default()
        };
        Ok((output, metrics))
    }

    /// Walk the tree per input bit until the end-marker leaf.
    fn decode_body(&self, root: &Node, reader: &mut BitReader) -> Result<Vec<u8>> {
        // A leaf root means every code is zero-length. The cursor must
        // be inspected before any bit is read: an end-marker root is an
        // empty payload, and any other leaf root can never reach the
        // end marker at all.
        if let Node::Leaf { symbol, .. } = root {
            if *symbol == EOF_SYMBOL {
                return Ok(Vec::new());
            }
            return Err(DecodeError::MissingEndMarker {
                position: reader.position(),
            }
            .into());
        }

        let mut output = Vec::new();
        let mut cursor = root;
        loop {
            if reader.is_empty() {
                return Err(DecodeError::MissingEndMarker {
                    position: reader.position(),
                }
                .into());
            }
            let bit = reader.read_bit()?;
            cursor = match cursor {
                Node::Internal { left, right, .. } => {
                    if bit {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
                // Loop restarts from the root, which is internal here.
                Node::Leaf { .. } => unreachable!("cursor only rests on internal nodes"),
            };

            if let Node::Leaf { symbol, .. } = cursor {
                if *symbol == EOF_SYMBOL {
                    break;
                }
                output.push(*symbol as u8);
                cursor = root;
            }
        }
        Ok(output)
    }
}
