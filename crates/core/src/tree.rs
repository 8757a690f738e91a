//! Huffman tree construction via minimum-pair merging.
//!
//! The tree is strictly owned: every child belongs to exactly one
//! parent, the whole structure is rebuilt for each compress/decompress
//! call and discarded afterwards.
//!
//! # Determinism
//!
//! `BinaryHeap` order for equal weights is unspecified, so nodes carry a
//! secondary ordering key: their creation order. Leaves take their
//! symbol index (0..=256) and every merged node takes the next counter
//! value. Equal-weight extraction is therefore deterministic, which
//! makes tree shape and compressed output reproducible across runs and
//! platforms.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::freq::SYMBOL_COUNT;

/// One node of a Huffman tree.
///
/// Leaves carry a symbol in 0..=256 (byte values plus the end marker);
/// internal nodes carry the sum of their children's weights. Weights are
/// only meaningful during construction; trees parsed from a header carry
/// zero weights throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u16,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// The node's weight (sum of children for internal nodes).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry: a node plus its deterministic tie-break key.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    order: u32,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Build a Huffman tree from the 257-entry weight array.
///
/// Every symbol is seeded as a leaf, zero weights included, so the
/// resulting table always covers the full alphabet. The two
/// minimum-weight nodes are merged repeatedly until one root remains.
///
/// With all 257 leaves seeded the root is always an internal node; a
/// leaf-only root can only come from a parsed header.
pub fn build_tree(weights: &[u64; SYMBOL_COUNT]) -> Node {
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = weights
        .iter()
        .enumerate()
        .map(|(symbol, &weight)| {
            Reverse(HeapEntry {
                weight,
                order: symbol as u32,
                node: Node::Leaf {
                    symbol: symbol as u16,
                    weight,
                },
            })
        })
        .collect();

    let mut next_order = SYMBOL_COUNT as u32;
    while heap.len() > 1 {
        let Reverse(left) = heap.pop().expect("heap has at least two entries");
        let Reverse(right) = heap.pop().expect("heap has at least two entries");
        let weight = left.weight + right.weight;
        heap.push(Reverse(HeapEntry {
            weight,
            order: next_order,
            node: Node::Internal {
                weight,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        }));
        next_order += 1;
    }

    heap.pop().expect("heap seeded with 257 leaves").0.node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::EOF_SYMBOL;

    fn weights_from(pairs: &[(u16, u64)]) -> [u64; SYMBOL_COUNT] {
        let mut weights = [0u64; SYMBOL_COUNT];
        weights[EOF_SYMBOL as usize] = 1;
        for &(symbol, weight) in pairs {
            weights[symbol as usize] = weight;
        }
        weights
    }

    #[test]
    fn test_root_weight_is_total() {
        let weights = weights_from(&[(b'a' as u16, 5), (b'b' as u16, 3)]);
        let root = build_tree(&weights);
        assert_eq!(root.weight(), 9); // 5 + 3 + eof
    }

    #[test]
    fn test_all_symbols_become_leaves() {
        let weights = weights_from(&[(0, 100)]);
        let root = build_tree(&weights);
        assert_eq!(root.leaf_count(), SYMBOL_COUNT);
    }

    #[test]
    fn test_root_is_internal() {
        // Even with a single nonzero weight, all 257 leaves are seeded.
        let weights = weights_from(&[]);
        let root = build_tree(&weights);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_deterministic_shape() {
        let weights = weights_from(&[(10, 4), (20, 4), (30, 4), (40, 4)]);
        let a = build_tree(&weights);
        let b = build_tree(&weights);
        assert_eq!(a, b);
    }

    #[test]
    fn test_internal_weight_is_sum_of_children() {
        let weights = weights_from(&[(1, 7), (2, 11), (3, 2)]);
        fn check(node: &Node) {
            if let Node::Internal { weight, left, right } = node {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        check(&build_tree(&weights));
    }
}
