//! Bit-level I/O for reading and writing individual bits.
//!
//! Both [`BitWriter`] and [`BitReader`] operate MSB-first (most
//! significant bit first), the conventional order for Huffman streams.
//!
//! # Padding
//! - `BitWriter::finish` pads an incomplete trailing byte with zeros.
//! - `BitReader` cannot distinguish padding from data; the codec stops
//!   at its end marker instead of relying on stream length.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! let bytes = writer.finish(); // 10111 -> 10111000
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(2).unwrap(), 0b11);
//! ```

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into a byte buffer.
///
/// Pending bits accumulate right-aligned in `acc`; complete bytes are
/// drained to `bytes` as they fill.
///
/// # Invariants
/// - `pending` is always < 8 between calls
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Pending bits, right-aligned (newest bit is the LSB)
    acc: u128,
    /// Number of pending bits in `acc` (0-7 between calls)
    pending: u32,
}

impl BitWriter {
    /// Create a new writer with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the lowest `count` bits of `value`, MSB-first.
    ///
    /// Writing `value = 0b101, count = 3` emits the bits 1, 0, 1 in that
    /// order. `count` may be 0 (a no-op), which is how zero-length codes
    /// are emitted.
    ///
    /// # Errors
    /// Returns `BitIoError::InvalidBitCount` if count > 64.
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        if count == 0 {
            return Ok(());
        }

        let mask = if count == 64 { u64::MAX } else { (1u64 << count) - 1 };
        // acc holds < 8 bits, so the shifted total stays under 72 bits.
        self.acc = (self.acc << count) | u128::from(value & mask);
        self.pending += count as u32;

        while self.pending >= 8 {
            self.pending -= 8;
            self.bytes.push((self.acc >> self.pending) as u8);
        }
        self.acc &= (1u128 << self.pending) - 1;
        Ok(())
    }

    /// Finish writing and return the output bytes.
    ///
    /// Any pending bits are left-aligned into one final byte, padded
    /// with trailing zeros. Consumes the writer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending > 0 {
            self.bytes.push((self.acc << (8 - self.pending)) as u8);
        }
        self.bytes
    }

    /// Total number of bits written so far (including pending bits).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending as usize
    }
}

/// Reads bits MSB-first from a byte buffer.
///
/// # Invariants
/// - `pos` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position (0 = MSB of the first byte)
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new reader over `data`, positioned at the first bit.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read `count` bits MSB-first, returned right-aligned.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if count > 64
    /// - `BitIoError::UnexpectedEof` if fewer than `count` bits remain
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        if count > self.bits_remaining() {
            return Err(BitIoError::UnexpectedEof { position: self.pos }.into());
        }

        let mut out = 0u64;
        for _ in 0..count {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            out = (out << 1) | u64::from(bit);
            self.pos += 1;
        }
        Ok(out)
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Rewind to the first bit. Used for the encoder's second pass.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Number of bits left in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True if no bits remain.
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }
}
