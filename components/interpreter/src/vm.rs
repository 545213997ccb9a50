//! Machine composition root
//!
//! Main entry point for running IntCode programs.

use bytecode_system::Program;
use core_types::{VmError, Word};
use memory_manager::Memory;
use tracing::debug;

use crate::config::MachineConfig;
use crate::context::{ExecutionState, Executor};
use crate::dispatch::StepResult;
use crate::error::ExecutionError;

/// An IntCode machine running one program
///
/// The machine steps its executor until a boundary the caller cares
/// about: an output (in feedback-loop mode), a missing input, or HALT.
#[derive(Debug, Clone)]
pub struct Machine {
    /// Construction parameters, kept for `reset`
    config: MachineConfig,
    /// Execution state
    executor: Executor,
}

impl Machine {
    /// Create a machine from an explicit configuration
    pub fn from_config(config: MachineConfig) -> Self {
        let executor = Self::build_executor(&config);
        Self { config, executor }
    }

    /// Create a machine with no initial input and the default memory ceiling
    ///
    /// # Example
    ///
    /// ```
    /// use core_types::word;
    /// use interpreter::Machine;
    ///
    /// let mut machine = Machine::new(vec![1, 0, 0, 0, 99], false, false);
    /// machine.run().unwrap();
    /// assert_eq!(machine.memory_snapshot()[0], word(2));
    /// ```
    pub fn new(program: impl Into<Program>, auto_expand: bool, feedback_loop: bool) -> Self {
        Self::from_config(MachineConfig {
            auto_expand_memory: auto_expand,
            feedback_loop,
            ..MachineConfig::new(program)
        })
    }

    /// Seed input values before any run
    ///
    /// The values also become part of the configuration, so `reset`
    /// queues them again.
    pub fn with_initial_input<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        for value in values {
            self.config.initial_inputs.push(value.clone());
            self.executor.add_input(value);
        }
        self
    }

    fn build_executor(config: &MachineConfig) -> Executor {
        let memory = Memory::with_limit(
            config.program.words().to_vec(),
            config.auto_expand_memory,
            config.memory_limit,
        );
        let mut executor = Executor::new(memory);
        for value in &config.initial_inputs {
            executor.add_input(value.clone());
        }
        executor
    }

    /// Queue one input value
    pub fn add_input_value(&mut self, value: Word) {
        self.executor.add_input(value);
    }

    /// Queue several input values in order
    pub fn add_inputs<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Word>,
    {
        for value in values {
            self.executor.add_input(value);
        }
    }

    /// Run until the next caller-meaningful boundary
    ///
    /// - feedback loop: returns after the first output, with exactly that value
    /// - otherwise: accumulates outputs until HALT
    /// - either way: returns early with the outputs so far when INPUT finds
    ///   the queue empty; check [`Machine::needs_input`]
    ///
    /// A halted machine returns an empty vector.
    ///
    /// # Errors
    ///
    /// Any fatal execution error. The machine is then faulted.
    pub fn run(&mut self) -> Result<Vec<Word>, ExecutionError> {
        let mut outputs = Vec::new();
        if self.is_halted() {
            return Ok(outputs);
        }

        debug!(
            position = self.instruction_pointer(),
            pending_inputs = self.pending_inputs(),
            "run"
        );

        loop {
            match self.executor.step()? {
                StepResult::Continue => {}
                StepResult::Output(value) => {
                    outputs.push(value);
                    if self.config.feedback_loop {
                        return Ok(outputs);
                    }
                }
                StepResult::InputNeeded | StepResult::Halted => return Ok(outputs),
            }
        }
    }

    /// Run until HALT regardless of the feedback-loop setting
    ///
    /// # Errors
    ///
    /// Any fatal execution error, or `NotRunnable` if the program asks
    /// for input while the queue is empty.
    pub fn run_to_halt(&mut self) -> Result<Vec<Word>, ExecutionError> {
        let mut outputs = Vec::new();
        if self.is_halted() {
            return Ok(outputs);
        }

        loop {
            match self.executor.step()? {
                StepResult::Continue => {}
                StepResult::Output(value) => outputs.push(value),
                StepResult::Halted => return Ok(outputs),
                StepResult::InputNeeded => {
                    return Err(ExecutionError::new(
                        self.instruction_pointer(),
                        None,
                        VmError::NotRunnable("program needs input but none is queued".to_string()),
                    ))
                }
            }
        }
    }

    /// Rebuild memory, registers, input queue and state from the configuration
    pub fn reset(&mut self) {
        debug!("reset");
        self.executor = Self::build_executor(&self.config);
    }

    /// Whether HALT has executed
    pub fn is_halted(&self) -> bool {
        self.executor.state() == ExecutionState::Halted
    }

    /// Whether the machine is suspended at INPUT with nothing queued
    pub fn needs_input(&self) -> bool {
        self.executor.state() == ExecutionState::Suspended && self.executor.pending_inputs() == 0
    }

    /// Current lifecycle state
    pub fn state(&self) -> ExecutionState {
        self.executor.state()
    }

    /// Address of the next instruction
    pub fn instruction_pointer(&self) -> usize {
        self.executor.memory().instruction_pointer()
    }

    /// Current relative base
    pub fn relative_base(&self) -> &Word {
        self.executor.memory().relative_base()
    }

    /// Number of queued, unconsumed inputs
    pub fn pending_inputs(&self) -> usize {
        self.executor.pending_inputs()
    }

    /// Number of instructions completed since construction or reset
    pub fn steps_executed(&self) -> u64 {
        self.executor.steps_executed()
    }

    /// Copy of the full memory contents
    pub fn memory_snapshot(&self) -> Vec<Word> {
        self.executor.snapshot()
    }

    /// The configuration this machine was built from
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}
