//! Database models with SQLx FromRow derives

mod feature;
mod user;

pub use feature::RankedFeatureModel;
pub use user::UserModel;
