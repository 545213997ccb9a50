//! Resumable single-step executor

use std::collections::VecDeque;

use bytecode_system::Opcode;
use core_types::{VmError, Word};
use memory_manager::Memory;
use tracing::{debug, trace, warn};

use crate::dispatch::{Dispatcher, StepResult};
use crate::error::ExecutionError;

/// Lifecycle of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionState {
    /// Constructed, no step taken yet
    Ready,
    /// At least one step taken, not suspended or finished
    Running,
    /// Waiting at an INPUT instruction for a value
    Suspended,
    /// HALT executed
    Halted,
    /// A fatal error was raised
    Faulted,
}

impl ExecutionState {
    /// Whether another step may be taken
    pub fn is_runnable(self) -> bool {
        !matches!(self, ExecutionState::Halted | ExecutionState::Faulted)
    }
}

/// Execution state for a single machine
///
/// Owns the memory image and the input queue, and advances the program
/// one decoded instruction per [`Executor::step`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executor {
    /// Memory image and registers
    memory: Memory,
    /// FIFO queue drained by INPUT instructions
    inputs: VecDeque<Word>,
    /// Current lifecycle state
    state: ExecutionState,
    /// Number of instructions completed
    steps: u64,
}

impl Executor {
    /// Create an executor over `memory`
    pub fn new(memory: Memory) -> Self {
        Self {
            memory,
            inputs: VecDeque::new(),
            state: ExecutionState::Ready,
            steps: 0,
        }
    }

    /// Append a value to the input queue
    pub fn add_input(&mut self, value: Word) {
        self.inputs.push_back(value);
    }

    /// Decode and execute exactly one instruction
    ///
    /// One queued input is consumed only when the instruction is INPUT.
    /// If INPUT finds the queue empty the instruction pointer is rolled
    /// back to the INPUT instruction and `InputNeeded` is returned, so the
    /// next call retries it.
    ///
    /// # Errors
    ///
    /// Any memory or decode failure, wrapped with the failing position.
    /// The executor is then faulted and further steps fail with
    /// `NotRunnable`, as do steps after HALT.
    pub fn step(&mut self) -> Result<StepResult, ExecutionError> {
        let position = self.memory.instruction_pointer();

        if !self.state.is_runnable() {
            let reason = match self.state {
                ExecutionState::Halted => "machine has halted",
                _ => "machine has faulted",
            };
            return Err(ExecutionError::new(
                position,
                None,
                VmError::NotRunnable(reason.to_string()),
            ));
        }

        let instruction = match self.memory.decode_next_instruction() {
            Ok(instruction) => instruction,
            Err(err) => return Err(self.fault(ExecutionError::new(position, None, err))),
        };

        let input = if instruction.opcode == Opcode::Input {
            self.inputs.pop_front()
        } else {
            None
        };

        trace!(position, opcode = ?instruction.opcode, "step");

        let result = match Dispatcher::execute(&mut self.memory, &instruction, input) {
            Ok(result) => result,
            Err(err) => {
                return Err(self.fault(ExecutionError::new(position, Some(instruction), err)))
            }
        };

        match result {
            StepResult::InputNeeded => {
                self.memory.restore_instruction_pointer(position);
                self.state = ExecutionState::Suspended;
                debug!(position, "suspended awaiting input");
            }
            StepResult::Halted => {
                self.steps += 1;
                self.state = ExecutionState::Halted;
                debug!(position, steps = self.steps, "halted");
            }
            _ => {
                self.steps += 1;
                self.state = ExecutionState::Running;
            }
        }

        Ok(result)
    }

    fn fault(&mut self, err: ExecutionError) -> ExecutionError {
        warn!(position = err.position, error = %err.source, "execution fault");
        self.state = ExecutionState::Faulted;
        err
    }

    /// Copy of the full memory contents
    pub fn snapshot(&self) -> Vec<Word> {
        self.memory.snapshot()
    }

    /// Read-only view of memory and registers
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Current lifecycle state
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// Number of queued, unconsumed inputs
    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of instructions completed so far
    pub fn steps_executed(&self) -> u64 {
        self.steps
    }
}
