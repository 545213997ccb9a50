//! Machine configuration

use bytecode_system::Program;
use core_types::Word;
use memory_manager::DEFAULT_MEMORY_LIMIT;

/// Everything needed to construct (or reset) a machine
///
/// # Example
///
/// ```
/// use bytecode_system::Program;
/// use core_types::word;
/// use interpreter::{Machine, MachineConfig};
///
/// let config = MachineConfig {
///     auto_expand_memory: true,
///     initial_inputs: vec![word(1)],
///     ..MachineConfig::new(Program::from(vec![3, 100, 4, 100, 99]))
/// };
///
/// let mut machine = Machine::from_config(config);
/// assert_eq!(machine.run().unwrap(), vec![word(1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Initial memory image
    pub program: Program,
    /// Grow memory on out-of-bounds writes instead of failing
    pub auto_expand_memory: bool,
    /// Return from `run()` after every single output
    pub feedback_loop: bool,
    /// Inputs queued before the first run
    pub initial_inputs: Vec<Word>,
    /// Ceiling for auto-expanded memory, in words
    pub memory_limit: usize,
}

impl MachineConfig {
    /// Configuration with defaults for everything but the program
    pub fn new(program: impl Into<Program>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            program: Program::default(),
            auto_expand_memory: false,
            feedback_loop: false,
            initial_inputs: Vec::new(),
            memory_limit: DEFAULT_MEMORY_LIMIT,
        }
    }
}
