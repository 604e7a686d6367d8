//! Quotes module implementation
//!
//! The public API is defined in `quotes-sdk` and re-exported here.

pub use quotes_sdk::{
    HomeFeed, NewUser, Quote, QuoteDraft, QuoteId, QuotesApi, QuotesError, Session, SessionToken,
    ToggleOutcome, User, UserId, UserQuotes,
};

pub mod module;
pub use module::QuotesModule;

pub mod config;
pub use config::QuotesConfig;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
