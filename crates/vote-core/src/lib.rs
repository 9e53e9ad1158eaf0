//! # vote-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    trending_score, Feature, RankedFeature, User, Vote, TRENDING_AGE_FLOOR_SECS, TRENDING_LIMIT,
};
pub use error::DomainError;
pub use traits::{
    FeaturePage, FeatureRepository, RepoResult, SortMode, UserRepository, VoteRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
