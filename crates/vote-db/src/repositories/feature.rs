//! PostgreSQL implementation of FeatureRepository
//!
//! Listing queries aggregate vote counts and the viewer's voted flag in
//! the same GROUP BY pass that reads the feature rows, so a response can
//! never mix feature data with a stale count.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vote_core::entities::{Feature, RankedFeature, TRENDING_AGE_FLOOR_SECS, TRENDING_LIMIT};
use vote_core::traits::{FeaturePage, FeatureRepository, RepoResult, SortMode};
use vote_core::value_objects::Snowflake;

use crate::models::RankedFeatureModel;

use super::error::map_db_error;

const RANKED_SELECT: &str = r"
    SELECT f.id, f.title, f.description, f.owner_id, f.created_at,
           COUNT(v.user_id) AS vote_count,
           COALESCE(BOOL_OR(v.user_id = $1), FALSE) AS voted
    FROM features f
    LEFT JOIN votes v ON v.feature_id = f.id
";

/// PostgreSQL implementation of FeatureRepository
#[derive(Clone)]
pub struct PgFeatureRepository {
    pool: PgPool,
}

impl PgFeatureRepository {
    /// Create a new PgFeatureRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeatureRepository for PgFeatureRepository {
    #[instrument(skip(self))]
    async fn create(&self, feature: &Feature) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO features (id, title, description, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(feature.id.into_inner())
        .bind(&feature.title)
        .bind(&feature.description)
        .bind(feature.owner_id.into_inner())
        .bind(feature.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM features WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_ranked(
        &self,
        id: Snowflake,
        viewer_id: Snowflake,
    ) -> RepoResult<Option<RankedFeature>> {
        let query = format!("{RANKED_SELECT} WHERE f.id = $2 GROUP BY f.id");

        let result = sqlx::query_as::<_, RankedFeatureModel>(&query)
            .bind(viewer_id.into_inner())
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(RankedFeature::from))
    }

    #[instrument(skip(self))]
    async fn list_ranked(
        &self,
        sort: SortMode,
        page: FeaturePage,
        viewer_id: Snowflake,
    ) -> RepoResult<Vec<RankedFeature>> {
        let results = match sort {
            SortMode::Votes => {
                let query = format!(
                    "{RANKED_SELECT}
                    GROUP BY f.id
                    ORDER BY vote_count DESC, f.id ASC
                    LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, RankedFeatureModel>(&query)
                    .bind(viewer_id.into_inner())
                    .bind(page.limit)
                    .bind(page.offset)
                    .fetch_all(&self.pool)
                    .await
            }
            SortMode::Date => {
                let query = format!(
                    "{RANKED_SELECT}
                    GROUP BY f.id
                    ORDER BY f.created_at DESC, f.id DESC
                    LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, RankedFeatureModel>(&query)
                    .bind(viewer_id.into_inner())
                    .bind(page.limit)
                    .bind(page.offset)
                    .fetch_all(&self.pool)
                    .await
            }
            SortMode::Trending => {
                // Score = votes / age in seconds, with the age clamped to a
                // floor so a feature created in the same instant as the
                // query still ranks with a finite score.
                let query = format!(
                    "{RANKED_SELECT}
                    GROUP BY f.id
                    ORDER BY COUNT(v.user_id)::FLOAT8
                        / GREATEST(EXTRACT(EPOCH FROM (NOW() - f.created_at)), $2) DESC,
                        f.id ASC
                    LIMIT $3"
                );
                sqlx::query_as::<_, RankedFeatureModel>(&query)
                    .bind(viewer_id.into_inner())
                    .bind(TRENDING_AGE_FLOOR_SECS)
                    .bind(TRENDING_LIMIT)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RankedFeature::from).collect())
    }
}
