//! huffpack-core: lossless Huffman codec with a self-describing header
//!
//! This library compresses arbitrary byte streams with no predetermined
//! dictionary. The Huffman tree is serialized into the output itself
//! (preorder, one bit per node kind), so a compressed stream carries
//! everything needed to reverse it bit-exactly.
//!
//! # Architecture
//!
//! - `bitio`: MSB-first bit reading/writing
//! - `freq`: symbol frequency counting (first pass)
//! - `tree`: Huffman tree construction by minimum-pair merging
//! - `code`: per-symbol (length, pattern) code derivation
//! - `header`: preorder tree serialization and parsing
//! - `codec`: encoder/decoder orchestration
//! - `metrics`: byte/bit accounting for one operation
//!
//! # Design principles
//!
//! - **No panics**: all failures are structured errors
//! - **Deterministic**: equal-weight ties break on creation order, so
//!   output is reproducible across runs and platforms
//! - **Self-describing**: no side tables; the header is the tree
//!
//! # Example
//!
//! ```
//! use huffpack_core::Codec;
//!
//! let codec = Codec::new();
//! let compressed = codec.compress(b"go go gophers")?;
//! let restored = codec.decompress(&compressed)?;
//! assert_eq!(restored, b"go go gophers");
//! # Ok::<(), huffpack_core::Error>(())
//! ```

pub mod bitio;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod header;
pub mod metrics;
pub mod tree;

// Re-export commonly used types
pub use codec::{Codec, Verbosity};
pub use error::{Error, Result};
pub use metrics::CodecMetrics;
