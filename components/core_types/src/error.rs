//! Fatal machine errors.
//!
//! Every variant aborts the current run. Suspension on input is not an
//! error and has no variant here; it is a regular step outcome.

use crate::Word;
use thiserror::Error;

/// The kind of a fatal machine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Opcode does not match any known operation
    InvalidOpcode,
    /// Unknown addressing-mode digit, or a mode the opcode forbids
    InvalidParameterMode,
    /// Fewer words remain than the opcode's arity requires
    TruncatedProgram,
    /// Negative or out-of-bounds memory access
    InvalidAddress,
    /// Auto-expansion would exceed the memory ceiling
    MemoryLimitExceeded,
    /// Instruction pointer is outside memory before a decode
    EndOfProgram,
    /// Step attempted on a machine that has halted or faulted
    NotRunnable,
}

/// A fatal machine error with diagnostic context.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, VmError};
///
/// let error = VmError::TruncatedProgram {
///     position: 4,
///     required: 3,
///     available: 1,
/// };
///
/// assert_eq!(error.kind(), ErrorKind::TruncatedProgram);
/// assert!(error.to_string().contains("position 4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Opcode does not match any known operation
    #[error("invalid opcode {opcode} in word {word} at position {position}")]
    InvalidOpcode {
        /// Address of the instruction word
        position: usize,
        /// The full instruction word
        word: Word,
        /// The decoded opcode (`word mod 100`)
        opcode: Word,
    },

    /// Unknown addressing-mode digit, or a mode the opcode forbids
    #[error("invalid mode for parameter {parameter} at position {position}: {reason}")]
    InvalidParameterMode {
        /// Address of the instruction word
        position: usize,
        /// Zero-based parameter index
        parameter: usize,
        /// What was wrong with the mode
        reason: String,
    },

    /// Fewer words remain than the opcode's arity requires
    #[error("truncated program at position {position}: {required} parameters required, {available} available")]
    TruncatedProgram {
        /// Address of the instruction word
        position: usize,
        /// Arity of the decoded opcode
        required: usize,
        /// Words remaining after the instruction word
        available: usize,
    },

    /// Negative or out-of-bounds memory access
    #[error("invalid address {address}")]
    InvalidAddress {
        /// The offending address
        address: Word,
    },

    /// Auto-expansion would exceed the memory ceiling
    #[error("address {address} exceeds memory limit of {limit} words")]
    MemoryLimitExceeded {
        /// The address that would have required growth
        address: Word,
        /// The configured ceiling
        limit: usize,
    },

    /// Instruction pointer is outside memory before a decode
    #[error("end of program: instruction pointer {position} outside memory of {length} words")]
    EndOfProgram {
        /// The instruction pointer
        position: usize,
        /// Current memory length
        length: usize,
    },

    /// Step attempted on a machine that has halted or faulted
    #[error("machine is not runnable: {0}")]
    NotRunnable(String),
}

impl VmError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VmError::InvalidOpcode { .. } => ErrorKind::InvalidOpcode,
            VmError::InvalidParameterMode { .. } => ErrorKind::InvalidParameterMode,
            VmError::TruncatedProgram { .. } => ErrorKind::TruncatedProgram,
            VmError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            VmError::MemoryLimitExceeded { .. } => ErrorKind::MemoryLimitExceeded,
            VmError::EndOfProgram { .. } => ErrorKind::EndOfProgram,
            VmError::NotRunnable(_) => ErrorKind::NotRunnable,
        }
    }
}

/// Result type for machine operations
pub type VmResult<T> = Result<T, VmError>;
