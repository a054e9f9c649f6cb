//! `keysmith` binary entry point.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = keysmith::Cli::parse();
    match keysmith::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keysmith: {e}");
            ExitCode::FAILURE
        }
    }
}
