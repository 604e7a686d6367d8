mod favorites_repo;
mod quotes_repo;
mod users_repo;

pub use favorites_repo::FavoritesRepository;
pub use quotes_repo::QuotesRepository;
pub use users_repo::{UserCredentials, UsersRepository};
