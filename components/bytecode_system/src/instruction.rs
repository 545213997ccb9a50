//! Decoded instruction representation
//!
//! An instruction is transient: it is built fresh by every decode and
//! dropped once executed.

use std::fmt;

use core_types::Word;
use num_traits::Signed;

use crate::opcode::Opcode;

/// How a parameter's raw value becomes an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Raw value is a memory address
    Position,
    /// Raw value is used literally; never legal for a write destination
    Immediate,
    /// Raw value is an offset added to the relative base
    Relative,
}

impl AddressingMode {
    /// Mode selected by one decimal digit of the instruction word
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(AddressingMode::Position),
            1 => Some(AddressingMode::Immediate),
            2 => Some(AddressingMode::Relative),
            _ => None,
        }
    }

    /// The decimal digit encoding this mode
    pub fn digit(self) -> u8 {
        match self {
            AddressingMode::Position => 0,
            AddressingMode::Immediate => 1,
            AddressingMode::Relative => 2,
        }
    }
}

/// A raw parameter word tagged with its addressing mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The word following the instruction word
    pub value: Word,
    /// How to interpret `value`
    pub mode: AddressingMode,
}

impl Parameter {
    /// Create a new parameter
    pub fn new(value: Word, mode: AddressingMode) -> Self {
        Self { value, mode }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            AddressingMode::Position => write!(f, "[{}]", self.value),
            AddressingMode::Immediate => write!(f, "{}", self.value),
            AddressingMode::Relative if self.value.is_negative() => {
                write!(f, "[rb-{}]", self.value.abs())
            }
            AddressingMode::Relative => write!(f, "[rb+{}]", self.value),
        }
    }
}

/// A decoded instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform
    pub opcode: Opcode,
    /// Exactly `opcode.arity()` parameters
    pub parameters: Vec<Parameter>,
    /// Address of the instruction word
    pub position: usize,
}

impl Instruction {
    /// Create a new instruction
    pub fn new(opcode: Opcode, parameters: Vec<Parameter>, position: usize) -> Self {
        Self {
            opcode,
            parameters,
            position,
        }
    }

    /// Address immediately after this instruction's last parameter
    pub fn next_instruction_position(&self) -> usize {
        self.position + 1 + self.parameters.len()
    }

    /// The write-destination parameter, if the opcode has one
    pub fn destination(&self) -> Option<&Parameter> {
        self.opcode
            .destination()
            .and_then(|index| self.parameters.get(index))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode.mnemonic())?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", separator, parameter)?;
        }
        Ok(())
    }
}
