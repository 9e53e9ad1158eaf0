//! Vote handlers
//!
//! Endpoints for casting and retracting votes. Both return 204: the
//! outcome is the same whether or not the ledger row changed.

use axum::extract::{Path, State};
use vote_service::{CastVoteRequest, VoteService};

use crate::extractors::{AuthUser, FeatureIdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Cast a vote on a feature
///
/// POST /api/votes
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CastVoteRequest>,
) -> ApiResult<NoContent> {
    let feature_id = request
        .feature_id
        .parse()
        .map_err(|_| ApiError::invalid_query("Invalid feature_id format"))?;

    let service = VoteService::new(state.service_context());
    service.cast_vote(feature_id, auth.user_id).await?;

    Ok(NoContent)
}

/// Retract a vote from a feature
///
/// DELETE /api/votes/{feature_id}
pub async fn retract_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<FeatureIdPath>,
) -> ApiResult<NoContent> {
    let feature_id = path.feature_id()?;

    let service = VoteService::new(state.service_context());
    service.retract_vote(feature_id, auth.user_id).await?;

    Ok(NoContent)
}
