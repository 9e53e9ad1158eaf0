//! Entity -> response DTO mappers

use vote_core::entities::{Feature, RankedFeature};

use super::responses::FeatureResponse;

impl From<RankedFeature> for FeatureResponse {
    fn from(ranked: RankedFeature) -> Self {
        Self {
            id: ranked.feature.id.to_string(),
            title: ranked.feature.title,
            description: ranked.feature.description,
            owner_id: ranked.feature.owner_id.to_string(),
            created_at: ranked.feature.created_at,
            vote_count: ranked.vote_count,
            voted: ranked.voted,
        }
    }
}

/// A feature fresh out of creation has no votes yet
impl From<Feature> for FeatureResponse {
    fn from(feature: Feature) -> Self {
        Self {
            id: feature.id.to_string(),
            title: feature.title,
            description: feature.description,
            owner_id: feature.owner_id.to_string(),
            created_at: feature.created_at,
            vote_count: 0,
            voted: false,
        }
    }
}
