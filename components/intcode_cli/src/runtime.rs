//! Runtime orchestration for IntCode execution
//!
//! The Runtime turns a program file and CLI options into a configured
//! machine, then drives it either to completion or interactively.

use std::path::Path;

use bytecode_system::Program;
use core_types::Word;
use interpreter::{Machine, MachineConfig};
use memory_manager::DEFAULT_MEMORY_LIMIT;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::ascii;
use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Outcome of a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Every output value, in order
    #[serde(serialize_with = "serialize_words")]
    pub outputs: Vec<Word>,
    /// Whether the program reached HALT
    pub halted: bool,
    /// Instructions executed
    pub steps: u64,
    /// Final memory image, when requested
    #[serde(
        serialize_with = "serialize_memory",
        skip_serializing_if = "Option::is_none"
    )]
    pub memory: Option<Vec<Word>>,
}

fn decimal_strings(words: &[Word]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

fn serialize_words<S: Serializer>(words: &[Word], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(decimal_strings(words))
}

fn serialize_memory<S: Serializer>(
    memory: &Option<Vec<Word>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match memory {
        Some(words) => serializer.serialize_some(&decimal_strings(words)),
        None => serializer.serialize_none(),
    }
}

/// Main runtime that configures and drives IntCode machines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    /// Grow memory on out-of-bounds writes
    auto_expand: bool,
    /// Return from each run after a single output
    feedback_loop: bool,
    /// Ceiling for auto-expanded memory
    memory_limit: usize,
    /// Inputs queued before the first run
    inputs: Vec<Word>,
    /// Whether reports include the final memory image
    capture_memory: bool,
}

impl Runtime {
    /// Create a runtime with default machine settings
    ///
    /// # Example
    /// ```
    /// use intcode_cli::Runtime;
    ///
    /// let runtime = Runtime::new();
    /// let report = runtime.execute_string("104,42,99").unwrap();
    /// assert_eq!(report.outputs[0].to_string(), "42");
    /// ```
    pub fn new() -> Self {
        Self {
            auto_expand: false,
            feedback_loop: false,
            memory_limit: DEFAULT_MEMORY_LIMIT,
            inputs: Vec::new(),
            capture_memory: false,
        }
    }

    /// Build a runtime from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let mut inputs = cli.inputs.clone();
        for line in &cli.text {
            inputs.extend(ascii::encode_line(line));
        }

        Self::new()
            .with_auto_expand(cli.auto_expand)
            .with_feedback_loop(cli.feedback_loop)
            .with_memory_limit(cli.memory_limit)
            .with_inputs(inputs)
            .with_capture_memory(cli.dump_memory)
    }

    /// Enable memory auto-expansion
    pub fn with_auto_expand(mut self, enabled: bool) -> Self {
        self.auto_expand = enabled;
        self
    }

    /// Enable feedback-loop runs
    pub fn with_feedback_loop(mut self, enabled: bool) -> Self {
        self.feedback_loop = enabled;
        self
    }

    /// Set the memory ceiling
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    /// Set the initial inputs
    pub fn with_inputs(mut self, inputs: Vec<Word>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Include the final memory image in reports
    pub fn with_capture_memory(mut self, enabled: bool) -> Self {
        self.capture_memory = enabled;
        self
    }

    /// Read and parse a program file
    pub fn load_file(&self, path: impl AsRef<Path>) -> CliResult<Program> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CliError::ProgramFile {
            path: path.to_path_buf(),
            source,
        })?;
        let program = Program::parse(&source)?;
        info!(path = %path.display(), words = program.len(), "program loaded");
        Ok(program)
    }

    /// The machine configuration this runtime would use for `program`
    pub fn machine_config(&self, program: Program) -> MachineConfig {
        MachineConfig {
            program,
            auto_expand_memory: self.auto_expand,
            feedback_loop: self.feedback_loop,
            initial_inputs: self.inputs.clone(),
            memory_limit: self.memory_limit,
        }
    }

    /// Construct a machine for `program`
    pub fn machine(&self, program: Program) -> Machine {
        Machine::from_config(self.machine_config(program))
    }

    /// Execute a program file to completion
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or parsed, execution
    /// fails, or the program runs out of input
    pub fn execute_file(&self, path: impl AsRef<Path>) -> CliResult<RunReport> {
        let program = self.load_file(path)?;
        self.execute(program)
    }

    /// Execute program text to completion
    ///
    /// # Errors
    /// Returns `CliError` if parsing or execution fails
    pub fn execute_string(&self, source: &str) -> CliResult<RunReport> {
        let program = Program::parse(source)?;
        self.execute(program)
    }

    /// Run `program` until HALT using only the queued inputs
    pub fn execute(&self, program: Program) -> CliResult<RunReport> {
        let mut machine = self.machine(program);
        let mut outputs = Vec::new();

        loop {
            outputs.extend(machine.run()?);
            if machine.is_halted() {
                break;
            }
            if machine.needs_input() {
                return Err(CliError::InputExhausted {
                    position: machine.instruction_pointer(),
                });
            }
        }

        debug!(
            outputs = outputs.len(),
            steps = machine.steps_executed(),
            "program halted"
        );

        Ok(RunReport {
            outputs,
            halted: machine.is_halted(),
            steps: machine.steps_executed(),
            memory: self.capture_memory.then(|| machine.memory_snapshot()),
        })
    }

    /// Drive `program` interactively, prompting whenever it needs input
    pub fn repl(&self, program: Program, ascii: bool) -> CliResult<()> {
        let mut machine = self.machine(program);
        crate::repl::run_interactive(&mut machine, ascii)
    }

    /// Whether memory auto-expansion is enabled
    pub fn is_auto_expand_enabled(&self) -> bool {
        self.auto_expand
    }

    /// Whether feedback-loop runs are enabled
    pub fn is_feedback_loop_enabled(&self) -> bool {
        self.feedback_loop
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Format outputs for display, one value per line or as ASCII text
pub fn format_outputs(outputs: &[Word], ascii: bool) -> String {
    if ascii {
        ascii::render_outputs(outputs)
    } else {
        decimal_strings(outputs)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}
