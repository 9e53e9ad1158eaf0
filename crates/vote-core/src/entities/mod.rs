//! Domain entities

mod feature;
mod user;
mod vote;

pub use feature::{
    trending_score, Feature, RankedFeature, TRENDING_AGE_FLOOR_SECS, TRENDING_LIMIT,
};
pub use user::User;
pub use vote::Vote;
