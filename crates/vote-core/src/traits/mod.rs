//! Repository traits (ports)

mod repositories;

pub use repositories::{
    FeaturePage, FeatureRepository, RepoResult, SortMode, UserRepository, VoteRepository,
};
