//! Feature database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Feature row joined with its aggregated vote state for one viewer.
///
/// `vote_count` and `voted` come from the same GROUP BY pass that reads
/// the feature, so the two can never disagree within one response.
#[derive(Debug, Clone, FromRow)]
pub struct RankedFeatureModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub vote_count: i64,
    pub voted: bool,
}
