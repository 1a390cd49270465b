//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for transport-level HTTP failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, TLS errors, connection
    /// resets, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL was rejected by the HTTP client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a failed webhook delivery.
///
/// Transport failures and non-success responses are deliberately treated
/// alike: the webhook response alone cannot distinguish bad permissions,
/// a misspelled channel, or an expired URL, and no retry is attempted.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    /// The webhook responded with a non-2xx status.
    #[error("Webhook responded with status {status}")]
    NonSuccessStatus {
        /// The HTTP status returned by the webhook.
        status: http::StatusCode,
        /// The response body, if it was valid UTF-8.
        body: Option<String>,
    },

    /// The notification body could not be serialized to JSON.
    #[error("Failed to serialize webhook body: {0}")]
    Serialize(#[from] serde_json::Error),
}
