//! Symbol address extraction for machine-level program models.
//!
//! Reads the symbol table of a compiled binary (as printed by `objdump -t`),
//! and writes absolute addresses onto the blocks and instructions of a
//! program model whose instruction sizes are already known.

/// Address analysis passes
pub mod analysis;
pub mod config;
/// Core data types module
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod symbols;
pub mod timeout;

pub use analysis::{extract_symbols, PropagationReport, SymbolExtractor};
pub use config::ExtractConfig;
pub use error::{Result, SymaddrError};
pub use symbols::{SymbolRecord, SymbolTable};
