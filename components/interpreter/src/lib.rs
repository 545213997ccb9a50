//! Resumable IntCode interpreter
//!
//! This crate provides the execution side of the machine:
//! - Operation semantics bound to each opcode
//! - A single-step executor with a FIFO input queue that suspends,
//!   rather than fails, when input is missing
//! - The `Machine` composition root with its feedback-loop run policy
//!
//! # Example
//!
//! ```
//! use core_types::word;
//! use interpreter::Machine;
//!
//! // Echo one input value, then halt.
//! let mut machine = Machine::new(vec![3, 0, 4, 0, 99], false, false);
//!
//! assert!(machine.run().unwrap().is_empty());
//! assert!(machine.needs_input());
//!
//! machine.add_input_value(word(7));
//! assert_eq!(machine.run().unwrap(), vec![word(7)]);
//! assert!(machine.is_halted());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod vm;

// Re-export main types at crate root
pub use config::MachineConfig;
pub use context::{ExecutionState, Executor};
pub use dispatch::{Dispatcher, StepResult};
pub use error::ExecutionError;
pub use vm::Machine;
