//! Shared plumbing for the quotes workspace.
//!
//! - [`problem`]: RFC 9457 problem details and their axum response
//! - [`response`]: JSON response helpers for handlers
//! - [`error_layer`]: request context for problem responses
//! - [`db`]: connection setup and the transactional [`db::DbProvider`]
//! - [`logging`]: `tracing` subscriber setup

pub mod auth;
pub mod db;
pub mod error_layer;
pub mod logging;
pub mod problem;
pub mod response;
pub mod secret;

pub use db::{DbConfig, DbConnTrait, DbError, DbProvider};
pub use problem::{Problem, ValidationViolation};
pub use response::ApiResult;
pub use secret::SecretString;
