//! Route table and navigation guard.
//!
//! `Route` is the closed set of navigable destinations, each carrying a
//! static authentication requirement. `Router` evaluates every navigation
//! attempt against the current session state and either allows it or
//! redirects it.

pub mod guard;
pub mod routes;

pub use guard::{NavDecision, Router};
pub use routes::Route;
