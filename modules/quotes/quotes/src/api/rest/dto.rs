use quotes_kit::SecretString;
use quotes_sdk::{HomeFeed, NewUser, Quote, QuoteDraft, Session, ToggleOutcome, User, UserQuotes};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use utoipa::ToSchema;

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

/// REST DTO for quote representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub id: i32,
    pub author: String,
    pub text: String,
    pub owner_id: i32,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReq {
    pub email: String,
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
    #[schema(value_type = String, format = Password)]
    pub confirm_password: SecretString,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    pub email: String,
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
}

/// Body of create and edit requests.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReq {
    pub author: String,
    pub text: String,
}

/// Issued on login. `token` goes into `Authorization: Bearer <token>`.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub token: String,
    pub user_id: i32,
    /// RFC 3339 timestamp.
    pub expires_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedDto {
    pub quotes: Vec<QuoteDto>,
    pub users: Vec<UserDto>,
    pub favorite_ids: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcomeDto {
    Added,
    Removed,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleDto {
    pub quote_id: i32,
    pub outcome: ToggleOutcomeDto,
    /// Favorite state after the toggle.
    pub favorite: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserQuotesDto {
    pub user: UserDto,
    pub quotes: Vec<QuoteDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

// Conversion implementations between REST DTOs and SDK models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            email: user.email,
        }
    }
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id.0,
            author: quote.author,
            text: quote.text,
            owner_id: quote.owner.0,
        }
    }
}

impl From<RegisterReq> for NewUser {
    fn from(req: RegisterReq) -> Self {
        Self {
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
        }
    }
}

impl From<QuoteReq> for QuoteDraft {
    fn from(req: QuoteReq) -> Self {
        Self {
            author: req.author,
            text: req.text,
        }
    }
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        // Rfc3339 only fails for years outside 0..=9999
        let expires_at = session
            .expires_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| session.expires_at.unix_timestamp().to_string());
        Self {
            token: session.token.as_str().to_owned(),
            user_id: session.user_id.0,
            expires_at,
        }
    }
}

impl From<HomeFeed> for HomeFeedDto {
    fn from(feed: HomeFeed) -> Self {
        Self {
            quotes: feed.quotes.into_iter().map(Into::into).collect(),
            users: feed.users.into_iter().map(Into::into).collect(),
            favorite_ids: feed.favorite_ids.into_iter().map(|id| id.0).collect(),
        }
    }
}

impl From<ToggleOutcome> for ToggleOutcomeDto {
    fn from(outcome: ToggleOutcome) -> Self {
        match outcome {
            ToggleOutcome::Added => Self::Added,
            ToggleOutcome::Removed => Self::Removed,
        }
    }
}

impl From<UserQuotes> for UserQuotesDto {
    fn from(uq: UserQuotes) -> Self {
        Self {
            user: uq.user.into(),
            quotes: uq.quotes.into_iter().map(Into::into).collect(),
        }
    }
}
