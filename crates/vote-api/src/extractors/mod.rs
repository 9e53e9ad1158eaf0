//! Request extractors

mod auth;
mod listing;
mod path;
mod validated;

pub use auth::AuthUser;
pub use listing::ListQuery;
pub use path::FeatureIdPath;
pub use validated::ValidatedJson;
