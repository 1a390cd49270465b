//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::message::DefaultPayload;

/// Default bot username shown for the message.
pub const USERNAME: &str = "slack-notify";

/// Default success flag (builds are assumed successful unless told otherwise).
pub const SUCCESS: bool = true;

/// Default fail-on-error flag (delivery failures stop the pipeline).
pub const FAIL_ON_ERROR: bool = true;

/// Default payload selection: every auto-populated build fact.
#[must_use]
pub fn default_payloads() -> Vec<DefaultPayload> {
    DefaultPayload::ALL.to_vec()
}
