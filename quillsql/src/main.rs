// quillsql/src/main.rs

use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use quillsql_core::infrastructure::logging::init_logging;

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; --help / --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug text-to-sql ... for request timings and prompt sizes
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async {
        tokio::select! {
            result = commands::generate::execute(cli) => match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nOperation cancelled by user");
                ExitCode::FAILURE
            }
        }
    })
}
