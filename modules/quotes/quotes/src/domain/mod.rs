//! Domain layer: business rules, ports and repository contracts.
//!
//! The domain never imports `api::*` or `SeaORM` entities; storage is reached
//! through the traits in [`repos`] and outbound capabilities through [`ports`].

pub mod error;
pub mod fields;
pub mod ports;
pub mod repos;
pub mod service;
