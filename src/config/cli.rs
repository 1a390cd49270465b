//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.
//! Every notification option can also be sourced from an environment
//! variable (`SLACK_URL` for the webhook URL, `SLACK_NOTIFY_*` for the
//! rest), which clap applies as a fallback when the flag is absent.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Slack-Notify: Build Pipeline Slack Notifications
///
/// Formats a build notification as a Slack attachment and posts it to
/// an incoming webhook.
#[derive(Debug, Parser)]
#[command(name = "slack-notify")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Slack incoming webhook URL (must start with https://)
    #[arg(long, env = "SLACK_URL", hide_env_values = true, global = true)]
    pub url: Option<String>,

    /// The message to display; supports Slack markup and `[label](url)` links
    #[arg(long, short, env = "SLACK_NOTIFY_MESSAGE")]
    pub message: Option<String>,

    /// Text shown above the attachment block; literal \n sequences become newlines
    #[arg(long, env = "SLACK_NOTIFY_PRETEXT")]
    pub pretext: Option<String>,

    /// Target channel as #channel or @username (bare names get a # prefix)
    #[arg(long, env = "SLACK_NOTIFY_CHANNEL")]
    pub channel: Option<String>,

    /// Timestamp of a previous message to reply to in its thread
    #[arg(long = "thread-timestamp", env = "SLACK_NOTIFY_THREAD_TIMESTAMP")]
    pub thread_timestamp: Option<String>,

    /// Bot username shown for the message
    #[arg(long, env = "SLACK_NOTIFY_USERNAME")]
    pub username: Option<String>,

    /// Bot icon URL shown for the message
    #[arg(long = "icon-url", env = "SLACK_NOTIFY_ICON_URL")]
    pub icon_url: Option<String>,

    /// Use the webhook's configured username and icon, ignoring overrides
    #[arg(
        long = "use-webhook-identity",
        env = "SLACK_NOTIFY_USE_WEBHOOK_IDENTITY"
    )]
    pub use_webhook_identity: bool,

    /// Extra attachment fields as a JSON object, e.g. '{"Build": "1.2.3"}'
    #[arg(long, env = "SLACK_NOTIFY_PAYLOAD", value_name = "JSON")]
    pub payload: Option<String>,

    /// Auto-populated build facts to include (comma separated)
    #[arg(
        long = "default-payloads",
        env = "SLACK_NOTIFY_DEFAULT_PAYLOADS",
        value_enum,
        value_delimiter = ','
    )]
    pub default_payloads: Option<Vec<DefaultPayloadArg>>,

    /// Suppress all auto-populated build facts
    #[arg(long = "no-default-payloads", conflicts_with = "default_payloads")]
    pub no_default_payloads: bool,

    /// Properties deep-merged into the final attachment, as a JSON object
    #[arg(
        long = "attachment-properties",
        env = "SLACK_NOTIFY_ATTACHMENT_PROPERTIES",
        value_name = "JSON"
    )]
    pub attachment_properties: Option<String>,

    /// Whether the build succeeded; selects the attachment color
    #[arg(long, env = "SLACK_NOTIFY_SUCCESS", value_name = "BOOL")]
    pub success: Option<bool>,

    /// Whether a delivery failure should fail the pipeline step
    #[arg(
        long = "fail-on-error",
        env = "SLACK_NOTIFY_FAIL_ON_ERROR",
        value_name = "BOOL"
    )]
    pub fail_on_error: Option<bool>,

    /// Find and link channel names and usernames in the message
    #[arg(long = "link-names", env = "SLACK_NOTIFY_LINK_NAMES")]
    pub link_names: bool,

    /// Pipeline lane/step name for the Lane default payload
    #[arg(long, env = "SLACK_NOTIFY_LANE")]
    pub lane: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log the rendered webhook body without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slack-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "slack-notify.toml")]
        output: PathBuf,
    },
}

/// Default payload argument for CLI parsing.
///
/// Value names match the configuration file spelling (snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DefaultPayloadArg {
    /// The pipeline lane/step name
    #[value(name = "lane")]
    Lane,
    /// "Success" or "Error", derived from the success flag
    #[value(name = "test_result")]
    TestResult,
    /// The current git branch
    #[value(name = "git_branch")]
    GitBranch,
    /// The author of the last commit
    #[value(name = "git_author")]
    GitAuthor,
    /// The subject line of the last commit
    #[value(name = "last_git_commit")]
    LastGitCommit,
    /// The short hash of the last commit
    #[value(name = "last_git_commit_hash")]
    LastGitCommitHash,
}

impl From<DefaultPayloadArg> for crate::message::DefaultPayload {
    fn from(arg: DefaultPayloadArg) -> Self {
        match arg {
            DefaultPayloadArg::Lane => Self::Lane,
            DefaultPayloadArg::TestResult => Self::TestResult,
            DefaultPayloadArg::GitBranch => Self::GitBranch,
            DefaultPayloadArg::GitAuthor => Self::GitAuthor,
            DefaultPayloadArg::LastGitCommit => Self::LastGitCommit,
            DefaultPayloadArg::LastGitCommitHash => Self::LastGitCommitHash,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
