//! Interactive driver that prompts for input whenever the machine waits

use crate::ascii;
use crate::error::{CliError, CliResult};
use crate::runtime::format_outputs;
use core_types::Word;
use interpreter::Machine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

/// Run `machine` until it halts, reading input lines from the terminal
///
/// In ASCII mode each line is fed as character codes followed by a
/// newline; otherwise a line holds comma or whitespace separated integers.
pub fn run_interactive(machine: &mut Machine, ascii_mode: bool) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("Failed to initialize editor: {}", e)))?;

    loop {
        let outputs = machine.run()?;
        if !outputs.is_empty() {
            print!("{}", format_outputs(&outputs, ascii_mode));
            std::io::stdout().flush()?;
        }

        if machine.is_halted() {
            break;
        }
        if !machine.needs_input() {
            continue;
        }

        let prompt = if ascii_mode { "> " } else { "input> " };
        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }
                if trimmed == ".state" {
                    print_state(machine);
                    continue;
                }

                let _ = editor.add_history_entry(&line);
                if ascii_mode {
                    machine.add_inputs(ascii::encode_line(&line));
                    continue;
                }
                match parse_values(trimmed) {
                    Ok(values) => machine.add_inputs(values),
                    Err(message) => eprintln!("Error: {}", message),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Press Ctrl-D or type 'exit' to quit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                return Err(CliError::ReplError(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

fn print_state(machine: &Machine) {
    println!(
        "ip={} rb={} pending={} steps={}",
        machine.instruction_pointer(),
        machine.relative_base(),
        machine.pending_inputs(),
        machine.steps_executed()
    );
}

/// Parse a line of integers separated by commas or whitespace
pub fn parse_values(line: &str) -> Result<Vec<Word>, String> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Word>()
                .map_err(|_| format!("'{}' is not an integer", token))
        })
        .collect()
}
