//! Message formatting layer.
//!
//! This module turns raw notification input into a presentation-ready
//! Slack attachment:
//! - Text transforms ([`trim_message`], [`convert_links`],
//!   [`interpret_newlines`], [`normalize_channel`])
//! - Attachment assembly ([`build_attachment`], [`MessageContent`])
//! - Deep merging of user-supplied attachment properties ([`deep_merge`])
//!
//! The formatter performs no I/O and never fails; absent or malformed
//! text degrades to empty strings.

mod attachment;
mod format;
mod merge;

#[cfg(test)]
mod format_tests;

pub use attachment::{DefaultPayload, MessageContent, build_attachment};
pub use format::{
    MESSAGE_MAX_LEN, convert_links, interpret_newlines, normalize_channel, trim_message,
};
pub use merge::deep_merge;
