//! Code table derivation from a Huffman tree.
//!
//! Codes are (bit-length, bit-pattern) pairs rather than digit strings:
//! the length is what makes leading zero bits significant, so a code of
//! pattern 1 with length 5 is emitted as `00001`, never collapsed to a
//! single bit. Prefix-freeness is structural — codes are paths to
//! distinct leaves of one tree.

use crate::error::{CodeError, Result};
use crate::freq::SYMBOL_COUNT;
use crate::tree::Node;

/// One symbol's code: `len` significant bits, right-aligned in `bits`.
///
/// A zero-length code is valid only for a leaf-only tree (degenerate
/// single-symbol alphabet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Number of significant bits (0-64)
    pub len: u8,
    /// Bit pattern, right-aligned; upper bits are zero
    pub bits: u64,
}

impl Code {
    const EMPTY: Code = Code { len: 0, bits: 0 };
}

/// Per-symbol codes for the full 257-symbol alphabet.
///
/// Every symbol has an entry, including symbols that never occurred in
/// the input (their leaves sit deep in the tree). Wasteful for sparse
/// alphabets, but required for the table to be total.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Code; SYMBOL_COUNT],
}

impl CodeTable {
    /// Derive codes by walking the tree: left appends 0, right appends 1.
    ///
    /// A leaf root records the empty code for its symbol.
    ///
    /// # Errors
    /// `CodeError::CodeTooLong` if any leaf sits deeper than 64 levels
    /// (not realizable from `build_tree` with 64-bit counts, but a
    /// parsed header is unconstrained).
    pub fn from_tree(root: &Node) -> Result<CodeTable> {
        let mut codes = [Code::EMPTY; SYMBOL_COUNT];
        walk(root, 0, 0, &mut codes)?;
        Ok(CodeTable { codes })
    }

    /// The code for `symbol` (0..=256).
    pub fn get(&self, symbol: u16) -> Code {
        self.codes[symbol as usize]
    }

    /// Iterate over all (symbol, code) entries.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .map(|(symbol, &code)| (symbol as u16, code))
    }

    /// Number of entries, always 257.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; the table is total by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn walk(node: &Node, len: usize, bits: u64, codes: &mut [Code; SYMBOL_COUNT]) -> Result<()> {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Code {
                len: len as u8,
                bits,
            };
            Ok(())
        }
        Node::Internal { left, right, .. } => {
            if len == 64 {
                return Err(CodeError::CodeTooLong {
                    symbol: first_symbol(left),
                    length: len + 1,
                }
                .into());
            }
            walk(left, len + 1, bits << 1, codes)?;
            walk(right, len + 1, (bits << 1) | 1, codes)
        }
    }
}

/// Leftmost leaf symbol of a subtree, for error reporting.
fn first_symbol(node: &Node) -> u16 {
    match node {
        Node::Leaf { symbol, .. } => *symbol,
        Node::Internal { left, .. } => first_symbol(left),
    }
}
