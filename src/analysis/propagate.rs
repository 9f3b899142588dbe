//! Address propagation over the machine-level program model.
//!
//! Each function starts at the address of its entry label (`.LBB<f>_0`), or
//! failing that at the symbol it maps to. A cursor then walks the blocks in
//! layout order. Blocks with their own label reset the cursor to that label,
//! since the emitter may place constant pools, padding or split-function
//! stubs between blocks that the model does not contain. Every instruction
//! takes the cursor value and advances it by its size.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::function::MachineFunction;
use crate::core::program::Program;
use crate::symbols::SymbolTable;

/// Outcome of one propagation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationReport {
    /// Functions that received addresses
    pub functions_annotated: usize,
    /// `name/mapsto` of functions without any resolvable symbol
    pub functions_skipped: Vec<String>,
    /// Blocks that received an address
    pub blocks_annotated: usize,
    /// Blocks whose address came from their own label
    pub blocks_relabeled: usize,
    /// Instructions that received an address
    pub instructions_annotated: usize,
}

impl PropagationReport {
    pub fn merge(&mut self, other: PropagationReport) {
        self.functions_annotated += other.functions_annotated;
        self.functions_skipped.extend(other.functions_skipped);
        self.blocks_annotated += other.blocks_annotated;
        self.blocks_relabeled += other.blocks_relabeled;
        self.instructions_annotated += other.instructions_annotated;
    }
}

/// Resolve where a function starts: entry label first, then `mapsto`.
pub fn resolve_entry(symbols: &SymbolTable, function: &MachineFunction) -> Option<u64> {
    symbols.get(&function.entry_label()).or_else(|| {
        function
            .mapsto
            .as_deref()
            .and_then(|mapsto| symbols.get(mapsto))
    })
}

/// Assign addresses to the blocks and instructions of one function.
///
/// Returns `None`, leaving the function untouched, when no start address
/// can be resolved.
pub fn propagate_function(
    symbols: &SymbolTable,
    function: &mut MachineFunction,
) -> Option<PropagationReport> {
    let mut addr = resolve_entry(symbols, function)?;
    let mut report = PropagationReport {
        functions_annotated: 1,
        ..Default::default()
    };

    let name = function.name.clone();
    for block in function.blocks.iter_mut() {
        if let Some(block_addr) = symbols.get(&block.label(&name)) {
            if block_addr != addr {
                debug!(
                    function = %name,
                    block = %block.name,
                    inferred = %format!("{:#x}", addr),
                    labeled = %format!("{:#x}", block_addr),
                    "Block label overrides inferred address"
                );
            }
            addr = block_addr;
            report.blocks_relabeled += 1;
        }
        block.address = Some(addr);
        report.blocks_annotated += 1;

        for instruction in block.instructions.iter_mut() {
            instruction.address = Some(addr);
            addr = addr.wrapping_add(instruction.size);
            report.instructions_annotated += 1;
        }
    }
    Some(report)
}

/// Annotate every machine function of `program` with addresses.
///
/// Functions without a resolvable symbol are warned about and skipped; the
/// pass always completes.
pub fn propagate_addresses(symbols: &SymbolTable, program: &mut Program) -> PropagationReport {
    let mut report = PropagationReport::default();
    for function in program.machine_functions.iter_mut() {
        match propagate_function(symbols, function) {
            Some(r) => report.merge(r),
            None => {
                let descr = function.descriptor();
                warn!("No symbol for machine function {}", descr);
                report.functions_skipped.push(descr);
            }
        }
    }
    report
}
