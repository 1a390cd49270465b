//! Slack-Notify: Build Pipeline Slack Notifications
//!
//! A library for formatting build results as Slack message attachments
//! and delivering them to an incoming webhook endpoint.

pub mod config;
pub mod facts;
pub mod message;
pub mod webhook;
