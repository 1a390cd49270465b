//! Webhook dispatcher: serializes and posts the notification body.

use http::header::CONTENT_TYPE;
use http::HeaderValue;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{DeliveryError, HttpClient, HttpRequest, ReqwestClient};

/// Fixed remediation hint shown when a delivery fails.
///
/// The webhook response cannot distinguish bad permissions, a misspelled
/// channel, or an expired URL, so one message covers all of them.
pub const REMEDIATION_HINT: &str = "Maybe the integration has no permission to post on this \
     channel? Try removing the channel option, this is usually caused by a misspelled or \
     changed group/channel name or an expired SLACK_URL";

/// The JSON body posted to the webhook.
///
/// `None` fields serialize as JSON `null`, which the webhook treats the
/// same as absent. `attachments` always carries exactly one attachment.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    /// Normalized channel override, or `None` for the webhook's default.
    pub channel: Option<String>,
    /// Bot username override, suppressed when the webhook identity is used.
    pub username: Option<String>,
    /// Thread timestamp to reply into, if any.
    pub thread_ts: Option<String>,
    /// Bot icon override, suppressed when the webhook identity is used.
    pub icon_url: Option<String>,
    /// The attachments to render; exactly one per notification.
    pub attachments: Vec<Value>,
    /// Whether Slack should link channel names and usernames.
    pub link_names: bool,
}

/// Posts notification bodies to a Slack incoming webhook.
///
/// Owns its HTTP client explicitly; there is no ambient global state.
/// Delivery is synchronous from the caller's point of view and makes a
/// single attempt.
#[derive(Debug)]
pub struct Dispatcher<H> {
    client: H,
    url: Url,
}

impl Dispatcher<ReqwestClient> {
    /// Creates a dispatcher with the production HTTP client.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_client(ReqwestClient::new(), url)
    }
}

impl<H> Dispatcher<H> {
    /// Creates a dispatcher with a custom HTTP client.
    #[must_use]
    pub const fn with_client(client: H, url: Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl<H: HttpClient> Dispatcher<H> {
    /// Delivers a notification body to the webhook.
    ///
    /// Serializes `message` to JSON and POSTs it with
    /// `Content-Type: application/json`. A 2xx response is a success;
    /// any transport failure or other status is a [`DeliveryError`],
    /// with no status-specific branching and no retry.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when serialization, the transport, or
    /// the response status indicates failure.
    pub async fn deliver(&self, message: &WebhookMessage) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(message)?;

        let request = HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(body);

        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::info!("Successfully sent Slack notification");
            return Ok(());
        }

        Err(DeliveryError::NonSuccessStatus {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}
