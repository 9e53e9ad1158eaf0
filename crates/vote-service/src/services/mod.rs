//! Application services

mod auth;
mod context;
mod error;
mod feature;
mod vote;

pub use auth::AuthService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feature::FeatureService;
pub use vote::VoteService;
