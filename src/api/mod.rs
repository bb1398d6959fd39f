//! HTTP client module for the StockNotify backend API.
//!
//! This module provides the `ApiClient` shared by all views. The client
//! attaches the session's JWT bearer token to every outgoing request and
//! treats a 401 response as a session-invalidation signal: local session
//! state is cleared and the failure is still surfaced to the caller.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
