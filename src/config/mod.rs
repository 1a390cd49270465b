//! Configuration layer for slack-notify.
//!
//! This module provides:
//! - CLI argument parsing with environment fallbacks ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment variables** - Per-option fallbacks (`SLACK_URL`,
//!    `SLACK_NOTIFY_*`), applied by clap before merging
//! 3. **TOML config file** - Values from the configuration file
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL is the only required value.
//!
//! # Boolean Flag Semantics
//!
//! Flag-style booleans (`--use-webhook-identity`, `--link-names`) use OR
//! semantics: once set `true` in either CLI/env or TOML, the result is
//! `true`. Value-style booleans (`--success`, `--fail-on-error`) take an
//! explicit `true`/`false` and follow the normal precedence, since their
//! defaults are `true` and callers need to be able to turn them off.
//!
//! # Default Payload Selection
//!
//! `--default-payloads` replaces the TOML selection entirely (not merged).
//! `--no-default-payloads` selects the empty set, suppressing every
//! auto-populated field; the TOML equivalent is `default_payloads = []`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, DefaultPayloadArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
