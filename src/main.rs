//! Binary entrypoint for the `specflow` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match specflow::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
