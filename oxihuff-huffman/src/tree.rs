//! Huffman tree construction.
//!
//! The tree is stored as an arena: a flat vector of [`Node`]s where internal
//! nodes refer to their children by index. Leaves are pushed first, one per
//! present symbol in ascending byte order, and every merge appends a new
//! internal node, so a node's index doubles as its insertion sequence.
//!
//! # Tie-breaking
//!
//! The priority queue orders nodes by `(frequency, index)`. Among equal
//! frequencies the node inserted first is removed first, which makes the tree
//! shape a pure function of the frequency table. The decoder rebuilds the
//! exact same tree from the stored frequencies without the codes ever being
//! transmitted.

use crate::frequency::FrequencyTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Index of a node within a [`HuffmanTree`].
pub type NodeId = usize;

/// A node of the Huffman tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A single symbol.
    Leaf {
        /// The byte value.
        symbol: u8,
        /// Its occurrence count.
        frequency: u64,
    },
    /// The merge of two subtrees.
    Internal {
        /// Sum of both children's frequencies.
        frequency: u64,
        /// Child reached by a `0` bit.
        zero: NodeId,
        /// Child reached by a `1` bit.
        one: NodeId,
    },
}

impl Node {
    /// Frequency carried by this node.
    pub fn frequency(&self) -> u64 {
        match *self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => frequency,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A Huffman tree owning all of its nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree from a frequency table.
    ///
    /// Returns `None` when no symbol has a non-zero count. With exactly one
    /// present symbol the tree is a single leaf that is also the root.
    pub fn build(table: &FrequencyTable) -> Option<Self> {
        let distinct = table.distinct();
        if distinct == 0 {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * distinct - 1);
        let mut heap = BinaryHeap::with_capacity(distinct);

        for (symbol, frequency) in table.iter() {
            let id = nodes.len();
            nodes.push(Node::Leaf { symbol, frequency });
            heap.push(Reverse((frequency, id)));
        }

        let root = loop {
            let Reverse((f0, zero)) = heap.pop()?;
            let Some(Reverse((f1, one))) = heap.pop() else {
                break zero;
            };

            let frequency = f0.saturating_add(f1);
            let id = nodes.len();
            nodes.push(Node::Internal {
                frequency,
                zero,
                one,
            });
            heap.push(Reverse((frequency, id)));
        };

        Some(Self { nodes, root })
    }

    /// Index of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    /// The root node.
    pub fn root_node(&self) -> Node {
        self.node(self.root)
    }

    /// Total number of nodes (leaves and internal).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a built tree holds at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Whether the tree is a lone leaf (one distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        self.root_node().is_leaf()
    }

    /// Number of code bits the tree spends on its own frequencies.
    ///
    /// This is the sum over leaves of `frequency * depth`, with the lone-leaf
    /// tree counting one bit per occurrence. Returns `None` on overflow.
    pub fn encoded_bits(&self) -> Option<u64> {
        if let Node::Leaf { frequency, .. } = self.root_node() {
            return Some(frequency);
        }

        let mut total = 0u64;
        let mut stack = vec![(self.root, 0u64)];
        while let Some((id, depth)) = stack.pop() {
            match self.node(id) {
                Node::Leaf { frequency, .. } => {
                    total = total.checked_add(frequency.checked_mul(depth)?)?;
                }
                Node::Internal { zero, one, .. } => {
                    stack.push((one, depth + 1));
                    stack.push((zero, depth + 1));
                }
            }
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_of(tree: &HuffmanTree, target: u8) -> Option<usize> {
        let mut stack = vec![(tree.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol, .. } if symbol == target => return Some(depth),
                Node::Leaf { .. } => {}
                Node::Internal { zero, one, .. } => {
                    stack.push((zero, depth + 1));
                    stack.push((one, depth + 1));
                }
            }
        }
        None
    }

    #[test]
    fn test_empty_table() {
        assert!(HuffmanTree::build(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn test_single_symbol() {
        let tree = HuffmanTree::build(&FrequencyTable::count(b"zzzz")).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.is_single_leaf());
        assert_eq!(
            tree.root_node(),
            Node::Leaf {
                symbol: b'z',
                frequency: 4
            }
        );
        assert_eq!(tree.encoded_bits(), Some(4));
    }

    #[test]
    fn test_two_symbols() {
        let tree = HuffmanTree::build(&FrequencyTable::count(b"abbb")).unwrap();
        assert_eq!(tree.len(), 3);
        // Lower frequency is removed first and lands on the zero branch.
        assert_eq!(
            tree.root_node(),
            Node::Internal {
                frequency: 4,
                zero: 0,
                one: 1
            }
        );
        assert_eq!(tree.node(0), Node::Leaf { symbol: b'a', frequency: 1 });
    }

    #[test]
    fn test_aaabbc_shape() {
        let tree = HuffmanTree::build(&FrequencyTable::count(b"AAABBC")).unwrap();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.root_node().frequency(), 6);

        assert_eq!(depth_of(&tree, b'A'), Some(1));
        assert_eq!(depth_of(&tree, b'B'), Some(2));
        assert_eq!(depth_of(&tree, b'C'), Some(2));
        // 3*1 + 2*2 + 1*2
        assert_eq!(tree.encoded_bits(), Some(9));
    }

    #[test]
    fn test_equal_frequencies_tie_break_by_insertion() {
        let tree = HuffmanTree::build(&FrequencyTable::count(b"dcba")).unwrap();
        // Leaves 0..4 are a, b, c, d. (a, b) merge first, then (c, d).
        assert_eq!(
            tree.node(4),
            Node::Internal {
                frequency: 2,
                zero: 0,
                one: 1
            }
        );
        assert_eq!(
            tree.node(5),
            Node::Internal {
                frequency: 2,
                zero: 2,
                one: 3
            }
        );
        assert_eq!(tree.root(), 6);
    }

    #[test]
    fn test_deterministic() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::count(data);
        assert_eq!(HuffmanTree::build(&table), HuffmanTree::build(&table));
    }

    #[test]
    fn test_full_alphabet_node_count() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let tree = HuffmanTree::build(&FrequencyTable::count(&data)).unwrap();
        assert_eq!(tree.leaf_count(), 256);
        assert_eq!(tree.len(), 511);
        assert_eq!(tree.root_node().frequency(), 1000);
    }
}
