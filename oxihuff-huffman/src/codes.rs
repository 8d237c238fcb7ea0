//! Code table derivation.
//!
//! Each present symbol gets the bit string spelled by the path from the root
//! to its leaf: `0` for a zero-branch, `1` for a one-branch. A lone-leaf tree
//! assigns its symbol the one-bit code `0`. Codes derived this way are
//! prefix-free.

use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::tree::{HuffmanTree, Node};
use std::fmt;

/// A variable-length code, stored right-aligned.
///
/// A tree built from frequencies whose total fits in a `u64` is at most
/// 92 levels deep (a deeper tree would need Fibonacci-sized counts), so
/// 128 bits are always enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    /// Maximum code length in bits.
    pub const MAX_LEN: u8 = 128;

    /// Create a code from its right-aligned bits and length.
    pub fn new(bits: u128, len: u8) -> Self {
        debug_assert!(len <= Self::MAX_LEN, "code length {len} exceeds 128");
        let mask = if len >= Self::MAX_LEN {
            u128::MAX
        } else {
            (1u128 << len) - 1
        };
        Self {
            bits: bits & mask,
            len,
        }
    }

    /// Extend the code by one bit.
    fn push(self, bit: bool) -> Self {
        debug_assert!(self.len < Self::MAX_LEN, "code length overflow");
        Self {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1,
        }
    }

    /// The code bits, right-aligned.
    #[inline]
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Code length in bits.
    #[inline]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit `index`, counted from the first (most significant) bit.
    pub fn bit(&self, index: u8) -> bool {
        debug_assert!(index < self.len);
        (self.bits >> (self.len - 1 - index)) & 1 != 0
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other.bits.checked_shr((other.len - self.len) as u32).unwrap_or(0) == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Codes for every present symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; SYMBOL_COUNT],
}

impl CodeTable {
    /// Derive the code of every leaf by walking the tree depth-first.
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut codes = [None; SYMBOL_COUNT];

        if let Node::Leaf { symbol, .. } = tree.root_node() {
            codes[symbol as usize] = Some(Code::new(0, 1));
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), Code::default())];
        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol, .. } => codes[symbol as usize] = Some(path),
                Node::Internal { zero, one, .. } => {
                    stack.push((one, path.push(true)));
                    stack.push((zero, path.push(false)));
                }
            }
        }

        Self { codes }
    }

    /// Code assigned to `symbol`, if the symbol is present.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }

    /// Total code bits needed to encode data with the given histogram.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| frequencies.get(symbol) * code.len() as u64)
            .sum()
    }
}
