//! IntCode Runner CLI
//!
//! Entry point for the `intcode` binary. Parses CLI arguments and
//! delegates to the Runtime for execution.

use clap::Parser as ClapParser;
use intcode_cli::runtime::format_outputs;
use intcode_cli::{Cli, CliResult, Runtime};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let runtime = Runtime::from_cli(cli);
    let program = runtime.load_file(&cli.program)?;

    if cli.disassemble {
        for line in bytecode_system::disassemble(program.words()) {
            println!("{}", line);
        }
        return Ok(());
    }

    if cli.interactive {
        return runtime.repl(program, cli.ascii);
    }

    let report = runtime.execute(program)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", format_outputs(&report.outputs, cli.ascii));
    if let Some(memory) = &report.memory {
        let cells: Vec<String> = memory.iter().map(ToString::to_string).collect();
        eprintln!("memory: {}", cells.join(","));
    }
    Ok(())
}
