//! Instruction entries of a machine-level program model.
//!
//! Instructions are never decoded here; only their recorded byte size is
//! used to advance the address cursor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single machine instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Position within the owning block
    pub index: u32,
    /// Encoded size in bytes
    pub size: u64,
    /// Absolute address, unset until resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<u64>,
    /// Unrelated metadata (opcode, branch info, ...) carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instruction {
    pub fn new(index: u32, size: u64) -> Self {
        Instruction {
            index,
            size,
            address: None,
            extra: Map::new(),
        }
    }

    /// First address past this instruction, if it has been placed
    pub fn end_address(&self) -> Option<u64> {
        self.address.map(|a| a.wrapping_add(self.size))
    }
}
