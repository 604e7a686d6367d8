pub mod favorite;
pub mod quote;
pub mod user;
