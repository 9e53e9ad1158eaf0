//! User entity - an account that owns features and votes

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// The credential hash is never part of the entity; it stays in the
/// persistence layer and is fetched separately for authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, email: String) -> Self {
        Self {
            id,
            email,
            created_at: Utc::now(),
        }
    }
}
