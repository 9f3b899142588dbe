//! # Symbols Module
//!
//! Parsing of textual symbol dumps and the label to address table built from
//! them. Only symbols in the configured code sections enter the table.

pub mod objdump;
pub mod table;
pub mod types;

// Re-export core types
pub use objdump::parse_line;
pub use table::{SymbolTable, TextSections};
pub use types::{ExtractStats, SymbolRecord};
