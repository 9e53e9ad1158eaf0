//! Feature handlers
//!
//! Endpoints for feature submission and ranked listings.

use axum::extract::{Path, State};
use axum::Json;
use vote_core::traits::SortMode;
use vote_service::{CreateFeatureRequest, FeatureListResponse, FeatureResponse, FeatureService};

use crate::extractors::{AuthUser, FeatureIdPath, ListQuery, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List features sorted by votes or date
///
/// GET /api/features?sort_by&page&limit
pub async fn list_features(
    State(state): State<AppState>,
    auth: AuthUser,
    query: ListQuery,
) -> ApiResult<Json<FeatureListResponse>> {
    let sort: SortMode = query.sort_by.parse()?;

    // Trending has its own endpoint with a fixed leaderboard size
    if sort == SortMode::Trending {
        return Err(ApiError::invalid_query(
            "sort_by must be one of: votes, date",
        ));
    }

    let service = FeatureService::new(state.service_context());
    let features = service
        .list_features(sort, query.page, query.limit, auth.user_id)
        .await?;

    Ok(Json(FeatureListResponse { features }))
}

/// Submit a new feature proposal
///
/// POST /api/features
pub async fn create_feature(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFeatureRequest>,
) -> ApiResult<Created<Json<FeatureResponse>>> {
    let service = FeatureService::new(state.service_context());
    let response = service.create_feature(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Fetch a single feature with its vote state
///
/// GET /api/features/{feature_id}
pub async fn get_feature(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<FeatureIdPath>,
) -> ApiResult<Json<FeatureResponse>> {
    let feature_id = path.feature_id()?;

    let service = FeatureService::new(state.service_context());
    let response = service.get_feature(feature_id, auth.user_id).await?;

    Ok(Json(response))
}

/// Trending leaderboard (top 10 by vote velocity)
///
/// GET /api/trending
pub async fn trending(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<FeatureListResponse>> {
    let service = FeatureService::new(state.service_context());
    let features = service
        .list_features(SortMode::Trending, 1, 10, auth.user_id)
        .await?;

    Ok(Json(FeatureListResponse { features }))
}
