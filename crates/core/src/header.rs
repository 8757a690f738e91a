//! Preorder tree header: serialization and parsing.
//!
//! # Header format
//!
//! ```text
//! internal node:  0 <left subtree> <right subtree>
//! leaf:           1 <symbol: 9 bits>
//! ```
//!
//! Nine bits per leaf symbol covers byte values 0..=255 plus the end
//! marker (256). The header immediately follows the 32-bit format
//! marker and fully describes the tree, so no frequency table or length
//! field is transmitted.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{FormatError, Result};
use crate::freq::EOF_SYMBOL;
use crate::tree::Node;

/// Fixed 32-bit constant identifying this header/tree variant.
pub const MAGIC: u32 = 0xface_8201;

/// Width of the format marker field.
pub const MAGIC_BITS: usize = 32;

/// Width of a leaf's symbol field: one bit wider than a byte.
pub const SYMBOL_BITS: usize = 9;

/// Serialize the tree in preorder: 0 + subtrees for an internal node,
/// 1 + 9-bit symbol for a leaf.
pub fn write_tree(node: &Node, writer: &mut BitWriter) -> Result<()> {
    match node {
        Node::Leaf { symbol, .. } => {
            writer.write_bits(1, 1)?;
            writer.write_bits(u64::from(*symbol), SYMBOL_BITS)
        }
        Node::Internal { left, right, .. } => {
            writer.write_bits(0, 1)?;
            write_tree(left, writer)?;
            write_tree(right, writer)
        }
    }
}

/// Parse a tree serialized by [`write_tree`].
///
/// Parsed nodes carry zero weights; only the shape and leaf symbols
/// matter after transmission.
///
/// # Errors
/// - `FormatError::TruncatedHeader` if the stream ends mid-tree
/// - `FormatError::InvalidSymbol` if a leaf symbol exceeds 256
pub fn read_tree(reader: &mut BitReader) -> Result<Node> {
    let bit = read_header_bits(reader, 1)?;
    if bit == 1 {
        let symbol = read_header_bits(reader, SYMBOL_BITS)? as u16;
        if symbol > EOF_SYMBOL {
            return Err(FormatError::InvalidSymbol { value: symbol }.into());
        }
        Ok(Node::Leaf { symbol, weight: 0 })
    } else {
        let left = read_tree(reader)?;
        let right = read_tree(reader)?;
        Ok(Node::Internal {
            weight: 0,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Read `count` bits, mapping end-of-stream to a header format error.
fn read_header_bits(reader: &mut BitReader, count: usize) -> Result<u64> {
    let position = reader.position();
    if reader.bits_remaining() < count {
        return Err(FormatError::TruncatedHeader { position }.into());
    }
    reader.read_bits(count)
}
