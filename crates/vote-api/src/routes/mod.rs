//! Route definitions
//!
//! All API routes organized by domain and mounted under /api, each group
//! carrying its own per-minute rate limit.

use axum::{
    routing::{delete, get, post},
    Router,
};
use vote_common::RateLimitConfig;

use crate::handlers::{auth, features, health, votes};
use crate::middleware::per_minute;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new().nest("/api", api_routes(rate_limit))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new()
        .merge(auth_routes(rate_limit))
        .merge(feature_routes(rate_limit))
        .merge(vote_routes(rate_limit))
        .merge(trending_routes(rate_limit))
}

/// Authentication routes
fn auth_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route_layer(per_minute(rate_limit.auth_per_minute))
}

/// Feature routes
///
/// Reads and creation have different limits, so they live in separate
/// groups merged onto the same paths.
fn feature_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    let reads = Router::new()
        .route("/features", get(features::list_features))
        .route("/features/:feature_id", get(features::get_feature))
        .route_layer(per_minute(rate_limit.list_per_minute));

    let writes = Router::new()
        .route("/features", post(features::create_feature))
        .route_layer(per_minute(rate_limit.create_per_minute));

    reads.merge(writes)
}

/// Vote routes
fn vote_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new()
        .route("/votes", post(votes::cast_vote))
        .route("/votes/:feature_id", delete(votes::retract_vote))
        .route_layer(per_minute(rate_limit.vote_per_minute))
}

/// Trending leaderboard route
fn trending_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new()
        .route("/trending", get(features::trending))
        .route_layer(per_minute(rate_limit.trending_per_minute))
}
