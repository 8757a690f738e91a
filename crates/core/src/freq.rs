//! Symbol frequency counting — the encoder's first pass.
//!
//! The alphabet is every byte value plus one end-marker symbol that is
//! never a real input byte. The end marker's slot is pre-set to 1 so it
//! always receives a code, even for empty input.

use crate::bitio::BitReader;
use crate::error::Result;

/// Number of bits in one input symbol.
pub const BITS_PER_WORD: usize = 8;

/// Number of real byte values (256).
pub const ALPHABET_SIZE: usize = 1 << BITS_PER_WORD;

/// The end-marker symbol, one past the last byte value.
pub const EOF_SYMBOL: u16 = ALPHABET_SIZE as u16;

/// Total distinct symbols: 256 byte values plus the end marker.
pub const SYMBOL_COUNT: usize = ALPHABET_SIZE + 1;

/// Count how often each symbol occurs in the input stream.
///
/// Reads 8 bits per symbol until fewer than 8 bits remain, fully
/// draining the reader; the caller rewinds it with [`BitReader::reset`]
/// before the encode pass. The end-marker slot is always 1.
pub fn count_frequencies(reader: &mut BitReader) -> Result<[u64; SYMBOL_COUNT]> {
    let mut weights = [0u64; SYMBOL_COUNT];
    weights[EOF_SYMBOL as usize] = 1;

    while reader.bits_remaining() >= BITS_PER_WORD {
        let symbol = reader.read_bits(BITS_PER_WORD)?;
        weights[symbol as usize] += 1;
    }
    Ok(weights)
}
