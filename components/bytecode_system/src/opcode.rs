//! IntCode opcodes
//!
//! The operation set is fixed. Each opcode knows its numeric code, its
//! parameter arity, and which of its parameters is a write destination.

use core_types::{VmError, VmResult};

use crate::instruction::{AddressingMode, Parameter};

/// IntCode operation selected by the low two decimal digits of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `mem[p2] = p0 + p1`
    Add,
    /// `mem[p2] = p0 * p1`
    Multiply,
    /// `mem[p0] = next input`, suspends when no input is queued
    Input,
    /// Emit `p0`
    Output,
    /// Jump to `p1` if `p0 != 0`
    JumpIfTrue,
    /// Jump to `p1` if `p0 == 0`
    JumpIfFalse,
    /// `mem[p2] = (p0 < p1) as 1/0`
    LessThan,
    /// `mem[p2] = (p0 == p1) as 1/0`
    Equals,
    /// `relative_base += p0`
    AdjustRelativeBase,
    /// Stop the program
    Halt,
}

impl Opcode {
    /// Every opcode, in numeric order
    pub const ALL: [Opcode; 10] = [
        Opcode::Add,
        Opcode::Multiply,
        Opcode::Input,
        Opcode::Output,
        Opcode::JumpIfTrue,
        Opcode::JumpIfFalse,
        Opcode::LessThan,
        Opcode::Equals,
        Opcode::AdjustRelativeBase,
        Opcode::Halt,
    ];

    /// Look up an opcode by its numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Multiply),
            3 => Some(Opcode::Input),
            4 => Some(Opcode::Output),
            5 => Some(Opcode::JumpIfTrue),
            6 => Some(Opcode::JumpIfFalse),
            7 => Some(Opcode::LessThan),
            8 => Some(Opcode::Equals),
            9 => Some(Opcode::AdjustRelativeBase),
            99 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Numeric code of this opcode
    pub fn code(self) -> u8 {
        match self {
            Opcode::Add => 1,
            Opcode::Multiply => 2,
            Opcode::Input => 3,
            Opcode::Output => 4,
            Opcode::JumpIfTrue => 5,
            Opcode::JumpIfFalse => 6,
            Opcode::LessThan => 7,
            Opcode::Equals => 8,
            Opcode::AdjustRelativeBase => 9,
            Opcode::Halt => 99,
        }
    }

    /// Number of parameter words following the instruction word
    pub fn arity(self) -> usize {
        match self {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    /// Index of the parameter this opcode writes to, if any
    pub fn destination(self) -> Option<usize> {
        match self {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => Some(2),
            Opcode::Input => Some(0),
            _ => None,
        }
    }

    /// Short assembler name used by the disassembler
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Multiply => "MUL",
            Opcode::Input => "IN",
            Opcode::Output => "OUT",
            Opcode::JumpIfTrue => "JNZ",
            Opcode::JumpIfFalse => "JZ",
            Opcode::LessThan => "LT",
            Opcode::Equals => "EQ",
            Opcode::AdjustRelativeBase => "ARB",
            Opcode::Halt => "HALT",
        }
    }

    /// Check if this opcode may move the instruction pointer non-linearly
    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::JumpIfTrue | Opcode::JumpIfFalse)
    }

    /// Static validation of decoded parameter modes
    ///
    /// The write destination of ADD, MULTIPLY, LESS_THAN, EQUALS and INPUT
    /// must never be `Immediate`.
    pub fn validate_parameters(self, position: usize, parameters: &[Parameter]) -> VmResult<()> {
        if let Some(index) = self.destination() {
            if let Some(parameter) = parameters.get(index) {
                if parameter.mode == AddressingMode::Immediate {
                    return Err(VmError::InvalidParameterMode {
                        position,
                        parameter: index,
                        reason: format!(
                            "{} destination may not be immediate",
                            self.mnemonic()
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
