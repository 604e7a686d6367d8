//! Infrastructure storage layer.
//!
//! All `SeaORM`-specific code lives here:
//! - `entity/`: `users`, `quotes` and the `favorites` join table
//! - `mapper.rs`: conversions between `SeaORM` models and SDK types
//! - `migrations/`: schema migrations
//! - `*_sea_repo.rs`: repository implementations

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;

mod favorites_sea_repo;
mod quotes_sea_repo;
mod users_sea_repo;

pub use favorites_sea_repo::OrmFavoritesRepository;
pub use quotes_sea_repo::OrmQuotesRepository;
pub use users_sea_repo::OrmUsersRepository;
