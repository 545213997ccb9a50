//! Memory Manager - IntCode memory image and registers
//!
//! This component provides:
//! - An owned, growable store of arbitrary-precision words
//! - The instruction pointer and relative base registers
//! - Optional auto-expansion guarded by a hard ceiling
//! - Instruction fetch via `decode_next_instruction`

pub mod memory;

// Re-export main types
pub use memory::{Memory, DEFAULT_MEMORY_LIMIT};
