//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and the API key environment variable
//! - Reporting usage and runtime errors with the right exit code
//! - Writing the formatted report to stdout

use std::{io, process::ExitCode};

use weather_core::API_KEY_ENV;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let code = cli::execute(
        std::env::args_os(),
        std::env::var(API_KEY_ENV).ok(),
        weather_core::provider_from_options,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
