mod cli;
mod commands;
mod error;

use std::io;

use clap::Parser;
use cli::Cli;
use commands::execute;
use error::CliError;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(&cli, stdin.lock(), stdout.lock(), stderr.lock())?;
    Ok(())
}
