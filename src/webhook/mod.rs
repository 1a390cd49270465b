//! Webhook delivery layer.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Posting a notification body to a Slack webhook ([`Dispatcher`],
//!   [`WebhookMessage`])
//!
//! Delivery is single-shot: one POST per notification, no retries. Any
//! transport failure or non-2xx response is a uniform [`DeliveryError`].

mod client;
mod dispatcher;
mod error;
mod http;


pub use client::ReqwestClient;
pub use dispatcher::{Dispatcher, REMEDIATION_HINT, WebhookMessage};
pub use error::{DeliveryError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
