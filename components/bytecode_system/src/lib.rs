//! Instruction set for the IntCode machine
//!
//! This crate provides the opcode set, the instruction decoder, program
//! loading from text, and a disassembler.
//!
//! # Features
//!
//! - Fixed opcode set as a tagged enum with arity and static mode checks
//! - Word-level decoder with position, immediate and relative addressing
//! - Comma-separated program text loading
//! - Linear disassembly for diagnostics
//!
//! # Example
//!
//! ```
//! use bytecode_system::{decode_instruction, AddressingMode, Opcode, Program};
//!
//! let program: Program = "1002,4,3,4,33".parse().unwrap();
//! let instruction = decode_instruction(program.words(), 0).unwrap();
//!
//! assert_eq!(instruction.opcode, Opcode::Multiply);
//! assert_eq!(instruction.parameters[1].mode, AddressingMode::Immediate);
//! assert_eq!(instruction.next_instruction_position(), 4);
//! assert_eq!(instruction.to_string(), "MUL [4], 3, [4]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decoder;
pub mod disasm;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export main types at crate root
pub use decoder::decode_instruction;
pub use disasm::{disassemble, DisassemblyLine, LineKind};
pub use instruction::{AddressingMode, Instruction, Parameter};
pub use opcode::Opcode;
pub use program::{Program, ProgramError};
