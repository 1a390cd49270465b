//! Application execution logic.
//!
//! Single-shot flow: gather build facts, build the attachment, post it
//! to the webhook, and classify the outcome according to `fail_on_error`.

use thiserror::Error;

use slack_notify::config::ValidatedConfig;
use slack_notify::facts::{BuildFacts, PipelineFacts};
use slack_notify::message::{build_attachment, normalize_channel};
use slack_notify::webhook::{
    DeliveryError, Dispatcher, HttpClient, REMEDIATION_HINT, WebhookMessage,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for a failed notification run.
///
/// Raised only when delivery fails and `fail_on_error` is set; its
/// display text is the fixed remediation hint shown to the user.
#[derive(Debug, Error)]
pub enum RunError {
    /// The webhook POST failed and the failure is fatal.
    #[error("{hint}")]
    DeliveryFailed {
        /// The fixed remediation hint.
        hint: &'static str,
        /// The underlying delivery error.
        #[source]
        source: DeliveryError,
    },
}

/// Executes a notification run with the production dispatcher.
///
/// # Errors
///
/// Returns [`RunError`] when delivery fails and `fail_on_error` is set.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let dispatcher = Dispatcher::new(config.url.clone());
    execute_with(&config, &dispatcher).await
}

/// Executes a notification run against the given dispatcher.
///
/// Split from [`execute`] so tests can inject a mock HTTP client.
async fn execute_with<H: HttpClient>(
    config: &ValidatedConfig,
    dispatcher: &Dispatcher<H>,
) -> Result<(), RunError> {
    let facts = PipelineFacts::new(config.lane.clone());
    let message = build_message(config, &facts);

    if config.dry_run {
        log_dry_run(&message);
        return Ok(());
    }

    match dispatcher.deliver(&message).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Error while pushing Slack message: {e}");

            if config.fail_on_error {
                Err(RunError::DeliveryFailed {
                    hint: REMEDIATION_HINT,
                    source: e,
                })
            } else {
                tracing::warn!("{REMEDIATION_HINT}");
                Ok(())
            }
        }
    }
}

/// Builds the webhook body from the validated configuration.
///
/// Normalizes the channel name and suppresses the identity overrides
/// when the webhook's own username and icon are requested.
fn build_message(config: &ValidatedConfig, facts: &impl BuildFacts) -> WebhookMessage {
    let attachment = build_attachment(&config.content, facts);

    let (username, icon_url) = if config.use_webhook_identity {
        (None, None)
    } else {
        (Some(config.username.clone()), config.icon_url.clone())
    };

    WebhookMessage {
        channel: normalize_channel(config.channel.as_deref()),
        username,
        thread_ts: config.thread_timestamp.clone(),
        icon_url,
        attachments: vec![attachment],
        link_names: config.link_names,
    }
}

/// Logs the rendered body instead of sending it.
fn log_dry_run(message: &WebhookMessage) {
    match serde_json::to_string_pretty(message) {
        Ok(body) => tracing::info!("Dry-run: webhook body would be:\n{body}"),
        Err(e) => tracing::error!("Dry-run: failed to render webhook body: {e}"),
    }
}
