//! Listing query extractor
//!
//! Parses the `sort_by`, `page`, and `limit` query parameters. The values
//! are passed through as-is; the service layer validates positivity and
//! caps the page size.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

fn default_sort_by() -> String {
    "votes".to_string()
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Query parameters for feature listings
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort_by: default_sort_by(),
            page: default_page(),
            limit: default_limit(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(query)
    }
}
