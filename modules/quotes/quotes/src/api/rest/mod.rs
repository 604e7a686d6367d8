//! REST surface of the quotes module.
//!
//! Session-scoped routes sit behind [`auth::require_session`], which turns the
//! bearer token into a [`quotes_sdk::Session`] request extension.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
