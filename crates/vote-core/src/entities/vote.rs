//! Vote entity - a (feature, user) endorsement record
//!
//! The (feature_id, user_id) pair is the natural primary key; there is
//! at most one vote per pair, enforced by the store.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Vote entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub feature_id: Snowflake,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote
    pub fn new(feature_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            feature_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
