//! Text transforms applied to notification content.
//!
//! All functions here are pure and infallible: absent input yields an
//! empty string (or `None` for channel names), malformed input passes
//! through unchanged.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum message length accepted by the Slack attachment API.
///
/// Longer messages are truncated silently; truncation is lossy by design.
pub const MESSAGE_MAX_LEN: usize = 3000;

/// Truncates a message to [`MESSAGE_MAX_LEN`] characters.
///
/// Absent input yields an empty string. Truncation counts characters
/// rather than bytes, so a multi-byte character is never split.
#[must_use]
pub fn trim_message(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    match text.char_indices().nth(MESSAGE_MAX_LEN) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

/// Rewrites inline `[label](url)` links into Slack's `<url|label>` syntax.
///
/// Text without link markup passes through unchanged, and the output
/// contains no link markup, so the conversion is idempotent.
#[must_use]
pub fn convert_links(text: &str) -> String {
    static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

    let pattern = LINK_PATTERN.get_or_init(|| {
        Regex::new(r"\[([^\[\]]*)\]\(([^)\s]+)\)").expect("link pattern is a valid regex")
    });

    pattern.replace_all(text, "<$2|$1>").into_owned()
}

/// Replaces the literal two-character sequence `\n` with a newline.
///
/// Upstream configuration sources often escape newlines; this undoes
/// that escaping. Absent input yields an empty string.
#[must_use]
pub fn interpret_newlines(text: Option<&str>) -> String {
    text.map_or_else(String::new, |t| t.replace("\\n", "\n"))
}

/// Normalizes a channel name for the webhook body.
///
/// Empty or absent input yields `None`, which leaves the webhook's
/// preconfigured channel in effect. Names already prefixed with `#` or
/// `@` are kept as-is; bare names get a `#` prefix.
#[must_use]
pub fn normalize_channel(name: Option<&str>) -> Option<String> {
    let name = name?;
    if name.is_empty() {
        return None;
    }

    if name.starts_with('#') || name.starts_with('@') {
        Some(name.to_string())
    } else {
        Some(format!("#{name}"))
    }
}
