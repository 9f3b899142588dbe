//! Symbol record types shared by the dump parser and the symbol table.

use serde::{Deserialize, Serialize};

/// One row of a symbol dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub address: u64,
    pub section: String,
    pub label: String,
}

/// Counters gathered while building a symbol table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    /// Lines read from the dump
    pub lines_read: usize,
    /// Lines that matched the symbol row shape
    pub records_parsed: usize,
    /// Records in a text section, i.e. addresses entered into the table
    pub addresses_extracted: usize,
}
