//! imgout - Format-dispatching image writer CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = imgout::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
