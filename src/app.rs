//! Process-level glue: exit codes, logging setup, and the hints printed
//! for common configuration mistakes.

use slack_notify::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes reported back to the pipeline.
pub mod exit_code {
    use std::process::ExitCode;

    /// Notification delivered, or skipped on purpose (dry run,
    /// `fail_on_error = false`).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad or missing configuration, detected before any network call.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The webhook POST failed while `fail_on_error` was in effect.
    ///
    /// A function because `ExitCode::from` is not const.
    pub fn delivery_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Suggests `slack-notify init` when the error looks like a first run
/// without a config file or webhook URL.
pub fn print_config_hint(error: &ConfigError) {
    let suggest_init = match error {
        ConfigError::MissingRequired { field: f, .. } => *f == field::URL,
        ConfigError::FileRead { .. } => true,
        _ => false,
    };

    if suggest_init {
        eprintln!("\nRun 'slack-notify init' to generate a configuration template.");
    }
}

/// Installs the global tracing subscriber.
///
/// `--verbose` lowers the default level to DEBUG; a `RUST_LOG` directive
/// still overrides either default.
pub fn setup_tracing(verbose: bool) {
    let default = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
