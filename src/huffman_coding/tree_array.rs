//! Flattens a Huffman tree into a single array, and derives the symbol codes from that array.
//!
//! Each element of the array is either a leaf or a branch:
//! - `>= 0` is a leaf holding a symbol.
//! - `<= -2` is a branch. The left child is the next slot, the right child starts at `-value`.
//!
//! The root is always slot 0. Both walks use an explicit stack, so a badly skewed tree of 511
//! nodes costs a few kilobytes of heap rather than call stack.

use std::fmt::{Display, Formatter};

use log::trace;
use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, NodeKind};

/// A Huffman code, most significant (first sent) bit first.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this code with one more bit on the end.
    pub fn with(&self, bit: bool) -> Code {
        let mut bits = Vec::with_capacity(self.0.len() + 1);
        bits.extend_from_slice(&self.0);
        bits.push(bit);
        Code(bits)
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.0 {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Symbol to code lookup. One entry per leaf of the tree.
pub type CodeTable = FxHashMap<u8, Code>;

/// Where a branch is in its visit when it sits on the serializer stack.
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Not yet written.
    Enter,
    /// Left subtree is written. `slot` is the branch's own placeholder.
    Right { slot: usize },
}

/// The serialized node array.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct TreeArray {
    pub nodes: Vec<i32>,
}

impl TreeArray {
    /// Flatten the tree, left subtree first.
    pub fn from_tree(tree: &HuffmanTree) -> TreeArray {
        let mut nodes: Vec<i32> = Vec::with_capacity(tree.len());
        let mut stack = vec![(tree.root, Phase::Enter)];

        while let Some((idx, phase)) = stack.pop() {
            match (tree.nodes[idx].kind, phase) {
                (NodeKind::Leaf(sym), _) => nodes.push(sym as i32),
                (NodeKind::Branch { left, .. }, Phase::Enter) => {
                    // Placeholder until we know where the right subtree starts
                    stack.push((idx, Phase::Right { slot: nodes.len() }));
                    nodes.push(0);
                    stack.push((left, Phase::Enter));
                }
                (NodeKind::Branch { right, .. }, Phase::Right { slot }) => {
                    nodes[slot] = -(nodes.len() as i32);
                    stack.push((right, Phase::Enter));
                }
            }
        }
        trace!("Tree array: {:?}", nodes);
        TreeArray { nodes }
    }

    /// Walk the array and assign each leaf symbol the path taken to reach it: 0 for the next
    /// slot (left), 1 for a jump (right). A lone leaf gets the single bit code 0.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::default();
        if self.nodes.len() == 1 {
            table.insert(self.nodes[0] as u8, Code::new().with(false));
            return table;
        }

        let mut stack = Vec::with_capacity(self.nodes.len());
        if !self.nodes.is_empty() {
            stack.push((0_usize, Code::new()));
        }
        while let Some((slot, code)) = stack.pop() {
            let value = self.nodes[slot];
            if value < 0 {
                // Push right first so the left side is visited first.
                stack.push(((-value) as usize, code.with(true)));
                stack.push((slot + 1, code.with(false)));
            } else {
                trace!("{:>3} -> {}", value, code);
                table.insert(value as u8, code);
            }
        }
        table
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
