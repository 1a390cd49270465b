//! Validated configuration after merging CLI, environment, and TOML sources.
//!
//! This module contains the final, validated notification request that is
//! used by the application. All validation is performed during
//! construction, before any network activity.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use url::Url;

use crate::message::{DefaultPayload, MessageContent};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated notification request ready for dispatch.
///
/// This struct represents a complete, validated configuration where the
/// webhook URL is present and HTTPS, and all JSON-valued options have
/// been parsed.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config, or [`ValidatedConfig::load`] to also read the config file
/// named on the command line. Environment fallbacks are applied by clap
/// during CLI parsing, so they sit between explicit flags and the file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required, HTTPS only)
    pub url: Url,

    /// Channel override, not yet normalized
    pub channel: Option<String>,

    /// Thread timestamp to reply into
    pub thread_timestamp: Option<String>,

    /// Bot username shown for the message
    pub username: String,

    /// Bot icon URL shown for the message
    pub icon_url: Option<String>,

    /// Suppress the username/icon overrides in favor of the webhook's own
    pub use_webhook_identity: bool,

    /// Whether Slack should link channel names and usernames
    pub link_names: bool,

    /// Whether a delivery failure fails the pipeline step
    pub fail_on_error: bool,

    /// Pipeline lane/step name for the build-facts provider
    pub lane: Option<String>,

    /// Message content handed to the formatter
    pub content: MessageContent,

    /// Dry-run mode (log the body without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL path carries the webhook secret, so only the host is shown.
        let host = self.url.host_str().unwrap_or("?");
        let channel = self.channel.as_deref().unwrap_or("webhook default");

        write!(
            f,
            "Config {{ webhook: {host}, channel: {channel}, success: {}, fail_on_error: {}, \
             default_payloads: {}, dry_run: {} }}",
            self.content.success,
            self.fail_on_error,
            self.content.default_payloads.len(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI arguments (with their environment fallbacks already applied by
    /// clap) take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing, non-HTTPS, or unparseable
    /// - `--payload` or `--attachment-properties` is not a JSON object
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let payload = Self::resolve_payload(cli, toml)?;
        let attachment_properties = Self::resolve_attachment_properties(cli, toml)?;
        let default_payloads = Self::resolve_default_payloads(cli, toml);

        let message = toml.map(|t| &t.message);
        let webhook = toml.map(|t| &t.webhook);

        let content = MessageContent {
            text: cli
                .message
                .clone()
                .or_else(|| message.and_then(|m| m.text.clone())),
            pretext: cli
                .pretext
                .clone()
                .or_else(|| message.and_then(|m| m.pretext.clone())),
            success: cli
                .success
                .or_else(|| message.and_then(|m| m.success))
                .unwrap_or(defaults::SUCCESS),
            payload,
            default_payloads,
            attachment_properties,
        };

        Ok(Self {
            url,
            channel: cli
                .channel
                .clone()
                .or_else(|| webhook.and_then(|w| w.channel.clone())),
            thread_timestamp: cli
                .thread_timestamp
                .clone()
                .or_else(|| webhook.and_then(|w| w.thread_timestamp.clone())),
            username: cli
                .username
                .clone()
                .or_else(|| webhook.and_then(|w| w.username.clone()))
                .unwrap_or_else(|| defaults::USERNAME.to_string()),
            icon_url: cli
                .icon_url
                .clone()
                .or_else(|| webhook.and_then(|w| w.icon_url.clone())),
            use_webhook_identity: cli.use_webhook_identity
                || webhook.is_some_and(|w| w.use_webhook_identity),
            link_names: cli.link_names || webhook.is_some_and(|w| w.link_names),
            fail_on_error: cli
                .fail_on_error
                .or_else(|| message.and_then(|m| m.fail_on_error))
                .unwrap_or(defaults::FAIL_ON_ERROR),
            lane: cli
                .lane
                .clone()
                .or_else(|| message.and_then(|m| m.lane.clone())),
            content,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // CLI/env takes precedence
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::URL,
                    "Use --url, the SLACK_URL environment variable, or set webhook.url in the \
                     config file",
                )
            })?;

        // An incoming webhook URL carries a secret; plain HTTP is a
        // configuration error, not a delivery error.
        if !url_str.starts_with("https://") {
            return Err(ConfigError::InsecureUrl {
                url: url_str.to_string(),
            });
        }

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_payload(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Map<String, Value>, ConfigError> {
        // CLI replaces the TOML table entirely (not merged)
        if let Some(ref raw) = cli.payload {
            return parse_json_object(raw, "payload");
        }

        Ok(toml.map(|t| t.message.payload.clone()).unwrap_or_default())
    }

    fn resolve_attachment_properties(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Value>, ConfigError> {
        if let Some(ref raw) = cli.attachment_properties {
            let object = parse_json_object(raw, "attachment-properties")?;
            return Ok(Some(Value::Object(object)));
        }

        Ok(toml.and_then(|t| t.message.attachment_properties.clone()))
    }

    fn resolve_default_payloads(cli: &Cli, toml: Option<&TomlConfig>) -> Vec<DefaultPayload> {
        if cli.no_default_payloads {
            return Vec::new();
        }

        if let Some(ref selected) = cli.default_payloads {
            return selected.iter().map(|&arg| arg.into()).collect();
        }

        toml.and_then(|t| t.message.default_payloads.clone())
            .unwrap_or_else(defaults::default_payloads)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_json_object(raw: &str, option: &'static str) -> Result<Map<String, Value>, ConfigError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson {
        option,
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject { option }),
    }
}
