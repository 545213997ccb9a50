//! IntCode Runner CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `intcode` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ascii;
pub mod cli;
pub mod error;
pub mod repl;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runtime::{RunReport, Runtime};
