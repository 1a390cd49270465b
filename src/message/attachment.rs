//! Slack attachment assembly.
//!
//! Builds the single attachment object sent per notification by combining
//! formatted text, the success color, opt-in build facts, user payload
//! entries, and deep-merged attachment properties.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::facts::BuildFacts;

use super::format;
use super::merge::deep_merge;

/// Auto-populated build facts that can be included as attachment fields.
///
/// The full set is included by default; an empty selection suppresses
/// all auto-populated fields while leaving user payload entries intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPayload {
    /// The pipeline lane/step name.
    Lane,
    /// "Success" or "Error", derived from the success flag.
    TestResult,
    /// The current git branch.
    GitBranch,
    /// The author of the last commit.
    GitAuthor,
    /// The subject line of the last commit.
    LastGitCommit,
    /// The short hash of the last commit.
    LastGitCommitHash,
}

impl DefaultPayload {
    /// All payloads, in the order they appear in the attachment by default.
    pub const ALL: [Self; 6] = [
        Self::Lane,
        Self::TestResult,
        Self::GitBranch,
        Self::GitAuthor,
        Self::LastGitCommit,
        Self::LastGitCommitHash,
    ];
}

/// Raw notification content before formatting.
///
/// Holds everything the formatter needs to assemble the attachment.
/// Delivery metadata (channel, identity, thread) lives in the validated
/// configuration instead.
#[derive(Debug, Clone)]
pub struct MessageContent {
    /// Free-form message text, markup-capable.
    pub text: Option<String>,
    /// Text shown above the attachment block.
    pub pretext: Option<String>,
    /// Whether the build succeeded (selects the attachment color).
    pub success: bool,
    /// Extra key/value entries appended as attachment fields.
    pub payload: Map<String, Value>,
    /// Which auto-populated build facts to include, in order.
    pub default_payloads: Vec<DefaultPayload>,
    /// Properties deep-merged into the final attachment, highest precedence.
    pub attachment_properties: Option<Value>,
}

/// Builds the attachment for a notification.
///
/// Applies [`format::trim_message`] and [`format::convert_links`] to the
/// message, [`format::interpret_newlines`] to the pretext, derives the
/// color from the success flag, assembles fields from the selected
/// default payloads and the user payload, and finally deep-merges
/// `attachment_properties` on top.
///
/// Missing build facts skip their field silently; an entirely empty
/// request still yields a minimal attachment.
#[must_use]
pub fn build_attachment(content: &MessageContent, facts: &impl BuildFacts) -> Value {
    let text = format::convert_links(&format::trim_message(content.text.as_deref()));
    let pretext = format::interpret_newlines(content.pretext.as_deref());
    let color = if content.success { "good" } else { "danger" };

    let mut fields = Vec::new();
    for payload in &content.default_payloads {
        if let Some(field) = default_field(*payload, content.success, facts) {
            fields.push(field);
        }
    }

    for (title, value) in &content.payload {
        fields.push(attachment_field(title, value.clone(), false));
    }

    let mut attachment = json!({
        "fallback": text,
        "text": text,
        "pretext": pretext,
        "color": color,
        "mrkdwn_in": ["pretext", "text", "fields"],
        "fields": fields,
    });

    if let Some(properties) = &content.attachment_properties {
        deep_merge(&mut attachment, properties);
    }

    attachment
}

/// Resolves a single default payload into an attachment field.
fn default_field(
    payload: DefaultPayload,
    success: bool,
    facts: &impl BuildFacts,
) -> Option<Value> {
    let (title, value, short) = match payload {
        DefaultPayload::Lane => ("Lane", facts.lane()?, true),
        DefaultPayload::TestResult => {
            let result = if success { "Success" } else { "Error" };
            ("Result", result.to_string(), true)
        }
        DefaultPayload::GitBranch => ("Git Branch", facts.git_branch()?, true),
        DefaultPayload::GitAuthor => ("Git Author", facts.git_author()?, true),
        DefaultPayload::LastGitCommit => ("Git Commit", facts.last_commit_subject()?, false),
        DefaultPayload::LastGitCommitHash => ("Git Commit Hash", facts.last_commit_hash()?, false),
    };

    Some(attachment_field(title, Value::String(value), short))
}

fn attachment_field(title: &str, value: Value, short: bool) -> Value {
    json!({
        "title": title,
        "value": value,
        "short": short,
    })
}
