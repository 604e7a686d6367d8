//! Conversions between `SeaORM` models and SDK contract types.

use quotes_sdk::{Quote, QuoteId, User, UserId};

use crate::domain::repos::UserCredentials;
use crate::infra::storage::entity::{quote, user};

impl From<user::Model> for User {
    fn from(e: user::Model) -> Self {
        Self {
            id: UserId(e.id),
            email: e.email,
        }
    }
}

impl From<user::Model> for UserCredentials {
    fn from(e: user::Model) -> Self {
        Self {
            id: UserId(e.id),
            password_hash: e.password_hash,
        }
    }
}

impl From<quote::Model> for Quote {
    fn from(e: quote::Model) -> Self {
        Self {
            id: QuoteId(e.id),
            author: e.author,
            text: e.text,
            owner: UserId(e.user_id),
        }
    }
}
