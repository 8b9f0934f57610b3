use std::{io, process::ExitCode};

use clap::Parser;

use money_manager::{cli::Args, init_logging};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match money_manager::cli::run(args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("Command failed: {error:?}");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
