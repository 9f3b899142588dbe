//! Program document: the machine-level model annotated by this crate.
//!
//! The document is stored as JSON. Only the parts the address pass needs are
//! typed; everything else is kept in flattened maps so that loading and
//! storing a document is lossless apart from the addresses written into it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::function::MachineFunction;
use crate::error::Result;

/// A program model with its machine functions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Machine functions in document order
    #[serde(rename = "machine-functions", default)]
    pub machine_functions: Vec<MachineFunction>,
    /// Other top-level sections of the document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Program {
    pub fn new(machine_functions: Vec<MachineFunction>) -> Self {
        Program {
            machine_functions,
            extra: Map::new(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a program document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let program = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            functions = program.machine_functions.len(),
            "Loaded program document"
        );
        Ok(program)
    }

    /// Store the document; `path` may be the file it was loaded from
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut text = self.to_json_string()?;
        text.push('\n');
        fs::write(path.as_ref(), text)?;
        Ok(())
    }
}
