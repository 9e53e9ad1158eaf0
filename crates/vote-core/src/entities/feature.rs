//! Feature entity - a user-submitted proposal that can be voted on

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Minimum feature age (seconds) used as the divisor floor when computing
/// a trending score. A feature queried in the instant it was created must
/// yield a finite score, never a division fault.
pub const TRENDING_AGE_FLOOR_SECS: f64 = 1.0;

/// Fixed size of the trending leaderboard. Trending is not paginated.
pub const TRENDING_LIMIT: i64 = 10;

/// Feature entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub owner_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Feature {
    /// Create a new Feature
    pub fn new(id: Snowflake, title: String, description: String, owner_id: Snowflake) -> Self {
        Self {
            id,
            title,
            description,
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// Age of the feature in seconds at the given instant
    pub fn age_seconds(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Trending score: vote count divided by floored age in seconds.
///
/// The age floor guards against zero or negative ages (a feature created
/// in the same instant as the query).
pub fn trending_score(vote_count: i64, age_seconds: f64) -> f64 {
    vote_count as f64 / age_seconds.max(TRENDING_AGE_FLOOR_SECS)
}

/// A feature together with its derived vote state for one viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedFeature {
    pub feature: Feature,
    /// Number of vote rows referencing this feature
    pub vote_count: i64,
    /// Whether the viewer has an active vote on this feature
    pub voted: bool,
}
