//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::message::DefaultPayload;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook delivery configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message content configuration section
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook delivery configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Slack incoming webhook URL (must start with https://)
    pub url: Option<String>,

    /// Target channel as #channel or @username
    pub channel: Option<String>,

    /// Timestamp of a previous message to reply to in its thread
    pub thread_timestamp: Option<String>,

    /// Bot username shown for the message
    pub username: Option<String>,

    /// Bot icon URL shown for the message
    pub icon_url: Option<String>,

    /// Use the webhook's configured username and icon
    #[serde(default)]
    pub use_webhook_identity: bool,

    /// Find and link channel names and usernames
    #[serde(default)]
    pub link_names: bool,
}

/// Message content configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// The message text
    pub text: Option<String>,

    /// Text shown above the attachment block
    pub pretext: Option<String>,

    /// Whether the build succeeded
    pub success: Option<bool>,

    /// Whether a delivery failure should fail the pipeline step
    pub fail_on_error: Option<bool>,

    /// Pipeline lane/step name
    pub lane: Option<String>,

    /// Auto-populated build facts to include; an empty list suppresses all
    pub default_payloads: Option<Vec<DefaultPayload>>,

    /// Extra attachment fields as a key/value table
    #[serde(default)]
    pub payload: Map<String, Value>,

    /// Properties deep-merged into the final attachment
    pub attachment_properties: Option<Value>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# slack-notify Configuration File

[webhook]
# Slack incoming webhook URL (required, must start with https://)
# Also read from the SLACK_URL environment variable.
# url = "https://hooks.slack.com/services/T00000000/B00000000/XXXXXXXX"

# Channel override as #channel or @username
# (default: the channel configured for the webhook)
# channel = "#builds"

# Reply into a thread by giving the parent message timestamp
# thread_timestamp = "1703039603.183649"

# Bot identity overrides (default username: "slack-notify")
# username = "release-bot"
# icon_url = "https://example.com/bot.png"

# Use the webhook's configured username and icon instead of overrides
# use_webhook_identity = false

# Find and link channel names and usernames in the message
# link_names = false

[message]
# The message text; supports Slack markup and [label](url) links
# text = "App successfully released!"

# Text shown above the attachment block
# pretext = "Release pipeline finished"

# Whether the build succeeded (default: true, selects green/red color)
# success = true

# Whether a delivery failure should fail the pipeline step (default: true)
# fail_on_error = true

# Pipeline lane/step name for the "Lane" field
# lane = "deploy"

# Auto-populated build facts to include (default: all of them)
# An empty list suppresses every auto-populated field.
# default_payloads = ["lane", "test_result", "git_branch", "git_author", "last_git_commit", "last_git_commit_hash"]

# Extra attachment fields
# [message.payload]
# "Build Date" = "2024-01-01"
# "Built by" = "Jenkins"

# Properties deep-merged into the final attachment
# (object fields merge recursively, "fields" arrays concatenate)
# [message.attachment_properties]
# thumb_url = "https://example.com/thumb.png"
"##
    .to_string()
}
