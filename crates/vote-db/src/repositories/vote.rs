//! PostgreSQL implementation of VoteRepository
//!
//! Vote uniqueness is enforced by the composite primary key on
//! (feature_id, user_id); casting uses ON CONFLICT DO NOTHING so
//! concurrent duplicate casts are a no-op rather than an error.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vote_core::entities::Vote;
use vote_core::traits::{RepoResult, VoteRepository};
use vote_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn cast(&self, vote: &Vote) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO votes (feature_id, user_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (feature_id, user_id) DO NOTHING
            ",
        )
        .bind(vote.feature_id.into_inner())
        .bind(vote.user_id.into_inner())
        .bind(vote.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn retract(&self, feature_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM votes WHERE feature_id = $1 AND user_id = $2
            ",
        )
        .bind(feature_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, feature_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM votes WHERE feature_id = $1 AND user_id = $2)
            ",
        )
        .bind(feature_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_for_feature(&self, feature_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM votes WHERE feature_id = $1
            ",
        )
        .bind(feature_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgVoteRepository>();
    }
}
