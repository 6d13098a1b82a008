pub mod revocation;
pub mod user;

pub use revocation::{RevocationStore, InMemoryRevocationStore};
pub use user::{UserRepository, InMemoryUserRepository};
