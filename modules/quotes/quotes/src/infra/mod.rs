pub mod password;
pub mod sessions;
pub mod storage;

pub use password::Argon2Hasher;
pub use sessions::InMemorySessionStore;
