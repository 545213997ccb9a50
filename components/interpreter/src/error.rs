//! Execution errors surfaced to machine callers

use bytecode_system::Instruction;
use core_types::{ErrorKind, VmError};
use thiserror::Error;

/// A fatal error raised while stepping the machine
///
/// Carries the position the failing step started at and, when decoding
/// got that far, the decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("execution failed at position {position}{}: {source}", describe(.instruction))]
pub struct ExecutionError {
    /// Instruction pointer at the start of the failing step
    pub position: usize,
    /// The instruction being executed, if decoding succeeded
    pub instruction: Option<Instruction>,
    /// The underlying machine error
    #[source]
    pub source: VmError,
}

impl ExecutionError {
    /// Create a new execution error
    pub fn new(position: usize, instruction: Option<Instruction>, source: VmError) -> Self {
        Self {
            position,
            instruction,
            source,
        }
    }

    /// Classify the underlying error
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

fn describe(instruction: &Option<Instruction>) -> String {
    match instruction {
        Some(inst) => format!(" ({})", inst),
        None => String::new(),
    }
}
