//! Feature service
//!
//! Feature submission and ranked listings.

use tracing::{info, instrument};
use vote_core::entities::{Feature, TRENDING_LIMIT};
use vote_core::traits::{FeaturePage, SortMode};
use vote_core::Snowflake;

use crate::dto::{CreateFeatureRequest, FeatureResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feature service
pub struct FeatureService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeatureService<'a> {
    /// Create a new FeatureService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new feature proposal
    #[instrument(skip(self, request), fields(owner_id = %owner_id))]
    pub async fn create_feature(
        &self,
        owner_id: Snowflake,
        request: CreateFeatureRequest,
    ) -> ServiceResult<FeatureResponse> {
        let feature = Feature::new(
            self.ctx.generate_id(),
            request.title,
            request.description,
            owner_id,
        );

        self.ctx.feature_repo().create(&feature).await?;

        info!(feature_id = %feature.id, "Feature created");

        Ok(FeatureResponse::from(feature))
    }

    /// List features ordered by the given sort mode
    ///
    /// Trending is a fixed-size leaderboard; page and limit are ignored
    /// for it. The other modes paginate with a 1-indexed page.
    #[instrument(skip(self))]
    pub async fn list_features(
        &self,
        sort: SortMode,
        page: i64,
        limit: i64,
        viewer_id: Snowflake,
    ) -> ServiceResult<Vec<FeatureResponse>> {
        let window = match sort {
            SortMode::Trending => FeaturePage::new(1, TRENDING_LIMIT)?,
            SortMode::Votes | SortMode::Date => FeaturePage::new(page, limit)?,
        };

        let ranked = self
            .ctx
            .feature_repo()
            .list_ranked(sort, window, viewer_id)
            .await?;

        Ok(ranked.into_iter().map(FeatureResponse::from).collect())
    }

    /// Fetch a single feature with its vote state for the viewer
    #[instrument(skip(self))]
    pub async fn get_feature(
        &self,
        feature_id: Snowflake,
        viewer_id: Snowflake,
    ) -> ServiceResult<FeatureResponse> {
        let ranked = self
            .ctx
            .feature_repo()
            .find_ranked(feature_id, viewer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Feature", feature_id.to_string()))?;

        Ok(FeatureResponse::from(ranked))
    }
}
