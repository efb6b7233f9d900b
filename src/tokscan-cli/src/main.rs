// tokscan-cli/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tokscan_cli::{run, Cli};

fn entrypoint() -> Result<ExitCode> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let report = run(
        &cli,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    // A partial scan is a failure even though the summary was printed.
    Ok(if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(code) => code,
    }
}
