use crate::core::basic_block::{block_label, Block};
use crate::core::name::Name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a machine function of the program model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineFunction {
    /// Function name (machine function identifier), number or string
    pub name: Name,

    /// Symbol name this machine function maps to, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapsto: Option<String>,

    /// Blocks in layout order
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Unrelated metadata carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MachineFunction {
    /// Create a new function without blocks
    pub fn new(name: impl Into<Name>, mapsto: Option<String>) -> Self {
        MachineFunction {
            name: name.into(),
            mapsto,
            blocks: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Builder-style helper appending a block
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Label of the function's first (implicit) block
    pub fn entry_label(&self) -> String {
        block_label(&self.name, 0)
    }

    /// `name/mapsto`, used to identify the function in diagnostics
    pub fn descriptor(&self) -> String {
        format!("{}/{}", self.name, self.mapsto.as_deref().unwrap_or(""))
    }
}
