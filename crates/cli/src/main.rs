use std::process::ExitCode;

use clap::Parser;
use env_logger::init;
use fontshelf_cli::cli::{Cli, exit_code_for_clap_error};

fn main() -> ExitCode {
    init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = exit_code_for_clap_error(err.kind());
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
