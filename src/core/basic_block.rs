//! Block type for straight-line regions of a machine function.
//!
//! A block knows its position within the owning function and, once the
//! propagation pass has run, its absolute start address.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::core::instruction::Instruction;
use crate::core::name::Name;

/// Prefix of the local labels the code emitter assigns to basic blocks.
pub const BLOCK_LABEL_PREFIX: &str = ".LBB";

/// Label the emitter gives block `block` of function `function`.
///
/// Block 0 is the function's first (implicit) block, so
/// `block_label(f, 0)` names the function entry.
pub fn block_label(function: impl fmt::Display, block: impl fmt::Display) -> String {
    format!("{}{}_{}", BLOCK_LABEL_PREFIX, function, block)
}

/// A basic block of a machine function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Name of this block within its function, usually its index
    pub name: Name,
    /// Absolute start address, unset until resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<u64>,
    /// Instructions in layout order
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    /// Unrelated metadata carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Block {
    /// Create an empty block with the given index
    pub fn new(index: u64) -> Self {
        Block {
            name: Name::Number(index),
            address: None,
            instructions: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Create a block with instructions of the given byte sizes
    pub fn with_sizes(index: u64, sizes: &[u64]) -> Self {
        let mut block = Block::new(index);
        block.instructions = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| Instruction::new(i as u32, size))
            .collect();
        block
    }

    /// This block's label, given the name of the function that owns it
    pub fn label(&self, function: &Name) -> String {
        block_label(function, &self.name)
    }

    /// Whether the block and all of its instructions carry an address
    pub fn is_annotated(&self) -> bool {
        self.address.is_some() && self.instructions.iter().all(|i| i.address.is_some())
    }
}
