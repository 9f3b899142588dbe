//! Configuration for symbol extraction.
//!
//! Defaults match the Patmos toolchain: `patmos-llvm-objdump` as dumper and
//! `.text` as the only code section.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SymaddrError};
use crate::io::command::DEFAULT_OBJDUMP;
use crate::symbols::TextSections;
use crate::timeout::DEFAULT_TIMEOUT_SECONDS;

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Symbol dump command, invoked as `<objdump> -t <binary>`.
    pub objdump: String,
    /// Sections whose symbols are code addresses.
    pub text_sections: Vec<String>,
    /// Log every extracted label.
    pub debug: bool,
    /// Report extraction and propagation counts.
    pub stats: bool,
    /// Dumper timeout in seconds; zero disables it.
    pub timeout_seconds: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            objdump: DEFAULT_OBJDUMP.to_string(),
            text_sections: vec![".text".to_string()],
            debug: false,
            stats: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ExtractConfig {
    /// Load a configuration from a JSON file; missing keys take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject settings that cannot produce any address.
    pub fn validate(&self) -> Result<()> {
        if self.objdump.trim().is_empty() {
            return Err(SymaddrError::InvalidInput(
                "objdump command is empty".to_string(),
            ));
        }
        if self.text_sections.iter().all(|s| s.trim().is_empty()) {
            return Err(SymaddrError::InvalidInput(
                "no text sections configured".to_string(),
            ));
        }
        Ok(())
    }

    pub fn text_sections(&self) -> TextSections {
        TextSections::new(self.text_sections.iter().cloned())
    }
}

/// Split a comma separated section list, ignoring whitespace around commas.
pub fn parse_section_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
