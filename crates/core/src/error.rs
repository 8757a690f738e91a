//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Each variant carries enough context (offending value, bit position)
//! to diagnose where in the compress/decompress pipeline it occurred.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - Format: the compressed stream is not a valid huffpack stream
/// - Decode: the body bit stream ended before the end marker
/// - Code: code derivation failed (pathological tree)
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Compressed stream is malformed (bad marker or truncated header)
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Body decoding failed (end marker never reached)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Code table derivation failed
    #[error("code error: {0}")]
    Code(#[from] CodeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the bit stream
    #[error("unexpected end of bit stream at bit {position}")]
    UnexpectedEof { position: usize },

    /// Invalid bit count (more than 64 bits in one call)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Compressed-stream format errors, detected before any output is produced.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The first 32 bits do not match the huffpack format marker
    #[error("bad format marker: expected {expected:#010x}, got {actual:#010x}")]
    BadMagic { expected: u32, actual: u32 },

    /// Bit stream ended before a complete tree was parsed
    #[error("header truncated at bit {position}")]
    TruncatedHeader { position: usize },

    /// A leaf in the header carried a symbol outside 0..=256
    #[error("invalid symbol {value} in header")]
    InvalidSymbol { value: u16 },
}

/// Body decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Bit stream ended mid-code, before the end-marker leaf was reached
    #[error("bit stream ended at bit {position} before the end marker")]
    MissingEndMarker { position: usize },
}

/// Code table derivation errors.
#[derive(Debug, Error)]
pub enum CodeError {
    /// A leaf path exceeded the 64-bit pattern representation
    #[error("code length {length} for symbol {symbol} exceeds 64 bits")]
    CodeTooLong { symbol: u16, length: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
