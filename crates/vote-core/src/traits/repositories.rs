//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Feature, RankedFeature, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Listing order for ranked feature queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Vote count descending, feature id ascending on ties
    Votes,
    /// Creation time descending
    Date,
    /// vote_count / floored age descending, fixed-size leaderboard
    Trending,
}

impl SortMode {
    /// Wire name of the sort mode (matches the `sort_by` query parameter)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Votes => "votes",
            Self::Date => "date",
            Self::Trending => "trending",
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "votes" => Ok(Self::Votes),
            "date" => Ok(Self::Date),
            "trending" => Ok(Self::Trending),
            other => Err(DomainError::InvalidSortMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset window for ranked feature queries
#[derive(Debug, Clone, Copy)]
pub struct FeaturePage {
    pub limit: i64,
    pub offset: i64,
}

impl FeaturePage {
    /// Build a page window from 1-indexed page number and page size.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPagination` if page or limit is not
    /// positive, or if the resulting offset would not fit in an i64.
    pub fn new(page: i64, limit: i64) -> RepoResult<Self> {
        if page < 1 {
            return Err(DomainError::InvalidPagination(format!(
                "page must be a positive integer, got {page}"
            )));
        }
        if limit < 1 {
            return Err(DomainError::InvalidPagination(format!(
                "limit must be a positive integer, got {limit}"
            )));
        }
        let limit = limit.min(100);
        let offset = (page - 1).checked_mul(limit).ok_or_else(|| {
            DomainError::InvalidPagination(format!("page {page} is out of range"))
        })?;
        Ok(Self { limit, offset })
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Feature Repository
// ============================================================================

#[async_trait]
pub trait FeatureRepository: Send + Sync {
    /// Create a new feature
    async fn create(&self, feature: &Feature) -> RepoResult<()>;

    /// Check if a feature exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Find one feature with vote_count and the viewer's voted flag
    async fn find_ranked(
        &self,
        id: Snowflake,
        viewer_id: Snowflake,
    ) -> RepoResult<Option<RankedFeature>>;

    /// List features with vote_count and the viewer's voted flag in one
    /// query pass, ordered by the given sort mode
    async fn list_ranked(
        &self,
        sort: SortMode,
        page: FeaturePage,
        viewer_id: Snowflake,
    ) -> RepoResult<Vec<RankedFeature>>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Insert a vote if the (feature, user) pair has none yet.
    ///
    /// Returns `true` if a row was inserted, `false` if one already
    /// existed. Uniqueness is enforced by the store, not by a
    /// check-then-insert sequence.
    async fn cast(&self, vote: &crate::entities::Vote) -> RepoResult<bool>;

    /// Delete a vote if present.
    ///
    /// Returns `true` if a row was deleted, `false` if none existed.
    async fn retract(&self, feature_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Check whether a vote exists for the pair
    async fn exists(&self, feature_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Number of votes referencing a feature
    async fn count_for_feature(&self, feature_id: Snowflake) -> RepoResult<i64>;
}
