mod error;
mod input;
mod print;
mod shell;

#[cfg(test)]
mod fixture;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::input::{EditorInput, ScriptInput};
use crate::print::StandardOut;
use crate::shell::Shell;

/// Interactive student roster
#[derive(Parser, Debug)]
struct Args {
    /// File with answers to replay before reading from the terminal
    #[clap(long, value_name = "FILENAME")]
    init: Option<PathBuf>,

    /// Log filter, e.g. "debug". Falls back to RUST_LOG, then "warn".
    #[clap(long)]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    report(run(args), &mut io::stderr())
}

fn run(args: Args) -> Result<()> {
    let mut shell = Shell::default();
    match args.init {
        Some(path) => {
            let mut input = ScriptInput::from_file(&path)?.then(EditorInput::new());
            shell.run(&mut input, &mut StandardOut)?;
        },
        None => shell.run(&mut EditorInput::new(), &mut StandardOut)?,
    }

    Ok(())
}

/// Writes a failed session's error to `err` and picks the exit status.
fn report(result: Result<()>, err: &mut impl io::Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
