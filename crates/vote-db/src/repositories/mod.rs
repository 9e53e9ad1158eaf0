//! PostgreSQL repository implementations

pub mod error;

mod feature;
mod user;
mod vote;

pub use feature::PgFeatureRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
