//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("voter{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: String,
}

/// Create feature request
#[derive(Debug, Serialize)]
pub struct CreateFeatureRequest {
    pub title: String,
    pub description: String,
}

impl CreateFeatureRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Feature {suffix}"),
            description: "A feature suggested by the test suite".to_string(),
        }
    }
}

/// Feature response
#[derive(Debug, Deserialize)]
pub struct FeatureResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner_id: String,
    pub created_at: String,
    pub vote_count: i64,
    pub voted: bool,
}

/// Feature listing response
#[derive(Debug, Deserialize)]
pub struct FeatureListResponse {
    pub features: Vec<FeatureResponse>,
}

/// Cast vote request
#[derive(Debug, Serialize)]
pub struct CastVoteRequest {
    pub feature_id: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
