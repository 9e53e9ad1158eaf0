//! Vote service
//!
//! Casting and retracting votes. Both operations are idempotent: a
//! duplicate cast or a retract with nothing to delete succeeds without
//! changing anything.

use tracing::{debug, info, instrument};
use vote_core::entities::Vote;
use vote_core::Snowflake;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote on a feature
    ///
    /// Voting on an unknown feature is NotFound; voting twice is a no-op.
    #[instrument(skip(self))]
    pub async fn cast_vote(&self, feature_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.feature_repo().exists(feature_id).await? {
            return Err(ServiceError::not_found("Feature", feature_id.to_string()));
        }

        let vote = Vote::new(feature_id, user_id);
        let inserted = self.ctx.vote_repo().cast(&vote).await?;

        if inserted {
            info!(feature_id = %feature_id, user_id = %user_id, "Vote cast");
        } else {
            debug!(feature_id = %feature_id, user_id = %user_id, "Vote already present");
        }

        Ok(())
    }

    /// Retract a vote from a feature
    ///
    /// Retracting on an unknown feature is NotFound; retracting a vote
    /// that was never cast is a no-op.
    #[instrument(skip(self))]
    pub async fn retract_vote(
        &self,
        feature_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        if !self.ctx.feature_repo().exists(feature_id).await? {
            return Err(ServiceError::not_found("Feature", feature_id.to_string()));
        }

        let deleted = self.ctx.vote_repo().retract(feature_id, user_id).await?;

        if deleted {
            info!(feature_id = %feature_id, user_id = %user_id, "Vote retracted");
        } else {
            debug!(feature_id = %feature_id, user_id = %user_id, "No vote to retract");
        }

        Ok(())
    }
}
