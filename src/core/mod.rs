//! Core data types for symaddr.
//!
//! The machine-level program model: a document of machine functions, each an
//! ordered list of blocks holding instructions with recorded byte sizes.

pub mod basic_block;
pub mod function;
pub mod instruction;
pub mod name;
pub mod program;

pub use basic_block::{block_label, Block};
pub use function::MachineFunction;
pub use instruction::Instruction;
pub use name::Name;
pub use program::Program;
