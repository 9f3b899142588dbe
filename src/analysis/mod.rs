//! Address analysis passes.
//!
//! `propagate` assigns block and instruction addresses from a symbol table;
//! `extract` wires a symbol dump source, the table and propagation together.

pub mod extract;
pub mod propagate;

pub use extract::{extract_symbols, extract_symbols_with, SymbolExtractor};
pub use propagate::{propagate_addresses, propagate_function, resolve_entry, PropagationReport};
