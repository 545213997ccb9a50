//! Command-line argument definitions

use std::path::PathBuf;

use clap::Parser;
use core_types::Word;
use memory_manager::DEFAULT_MEMORY_LIMIT;

/// Run IntCode programs
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "intcode", version, about = "Run IntCode programs")]
pub struct Cli {
    /// Program file: one line of comma-separated integers
    pub program: PathBuf,

    /// Input values, repeatable or comma-separated
    #[arg(
        short,
        long = "input",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub inputs: Vec<Word>,

    /// Text lines queued as ASCII input (each followed by a newline)
    #[arg(short, long = "text")]
    pub text: Vec<String>,

    /// Grow memory on out-of-bounds writes
    #[arg(short = 'x', long)]
    pub auto_expand: bool,

    /// Return from each run after a single output
    #[arg(long)]
    pub feedback_loop: bool,

    /// Ceiling for auto-expanded memory, in words
    #[arg(long, default_value_t = DEFAULT_MEMORY_LIMIT)]
    pub memory_limit: usize,

    /// Prompt for input whenever the program waits for it
    #[arg(long)]
    pub interactive: bool,

    /// Render outputs as ASCII text and read prompt lines as text
    #[arg(long)]
    pub ascii: bool,

    /// Print the disassembly and exit
    #[arg(short, long)]
    pub disassemble: bool,

    /// Print the final memory image
    #[arg(long)]
    pub dump_memory: bool,

    /// Print a JSON report instead of plain output
    #[arg(long)]
    pub json: bool,
}
