//! Public contract of the quotes module.
//!
//! Consumers depend on [`QuotesApi`] and the transport-agnostic models here,
//! never on the module's storage or REST types.

pub mod api;
pub mod errors;
pub mod models;

pub use api::QuotesApi;
pub use errors::QuotesError;
pub use models::{
    HomeFeed, NewUser, Quote, QuoteDraft, QuoteId, Session, SessionToken, ToggleOutcome, User,
    UserId, UserQuotes,
};
