//! Authentication session management.
//!
//! This module provides `Session` and its shared handle `SessionHandle`:
//! the client-held record of whether a user is currently authenticated,
//! represented by the presence of an opaque backend-issued token.
//!
//! The token is persisted to durable local storage so a restarted process
//! comes back up already logged in.

pub mod session;

pub use session::{Session, SessionHandle};
