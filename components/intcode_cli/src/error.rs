//! Error types for the CLI

use std::path::PathBuf;

use bytecode_system::ProgramError;
use interpreter::ExecutionError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal or stream I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The program file could not be read
    #[error("Could not read file '{}': {source}", .path.display())]
    ProgramFile {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// Program text could not be loaded
    #[error("Parse error: {0}")]
    ParseError(#[from] ProgramError),

    /// Fatal machine error
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),

    /// The program asked for input and none was supplied
    #[error("program needs more input at position {position}")]
    InputExhausted {
        /// Address of the waiting INPUT instruction
        position: usize,
    },

    /// Interactive prompt error
    #[error("REPL error: {0}")]
    ReplError(String),

    /// Report serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
