//! Domain layer containing the entities the session flows operate on.

pub mod entities;

pub use entities::{
    Claims, SigningDomain, TokenPair, User, ACCESS_TOKEN_TTL_SECONDS, REFRESH_TOKEN_TTL_SECONDS,
};
