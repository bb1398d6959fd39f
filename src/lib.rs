//! Client core for the StockNotify frontend.
//!
//! This crate wires up the three pieces the view layer builds on:
//! - [`auth::SessionHandle`]: the persisted authentication token and the
//!   derived logged-in state
//! - [`api::ApiClient`]: the shared HTTP client that attaches the token to
//!   every outgoing request and invalidates the session on a 401 response
//! - [`router::Router`]: the navigation guard that redirects unauthenticated
//!   users away from guarded routes
//!
//! The session is constructed once at startup and handed to the client and
//! the router; it is the only shared mutable state in the crate, and all
//! mutation goes through its two operations (`set_token`, `log_out`).

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod router;

pub use api::{ApiClient, ApiError};
pub use auth::SessionHandle;
pub use config::Config;
pub use router::{NavDecision, Route, Router};
