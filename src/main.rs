//! Command-line entry point: parse arguments, validate configuration, and
//! send exactly one notification.

use std::process::ExitCode;

use slack_notify::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Thin wrapper around the testable pieces, excluded from coverage.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return write_template(output);
    }

    match ValidatedConfig::load(&cli) {
        Ok(config) => {
            setup_tracing(config.verbose);
            tracing::debug!("{config}");
            deliver(config)
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Writes the annotated config template for the `init` subcommand.
fn write_template(output: &std::path::Path) -> ExitCode {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return exit_code::CONFIG_ERROR;
    }

    println!("Configuration template written to: {}", output.display());
    exit_code::SUCCESS
}

/// Drives the notification to completion on a fresh runtime.
#[cfg(not(tarpaulin_include))]
fn deliver(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start the async runtime: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    if let Err(e) = runtime.block_on(run::execute(config)) {
        tracing::error!("{e}");
        return exit_code::delivery_error();
    }

    exit_code::SUCCESS
}
