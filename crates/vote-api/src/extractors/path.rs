//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use serde::Deserialize;
use vote_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with feature_id
#[derive(Debug, Deserialize)]
pub struct FeatureIdPath {
    pub feature_id: String,
}

impl FeatureIdPath {
    /// Parse feature_id as Snowflake
    pub fn feature_id(&self) -> Result<Snowflake, ApiError> {
        self.feature_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid feature_id format"))
    }
}
