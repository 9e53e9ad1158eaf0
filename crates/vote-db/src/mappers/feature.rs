//! Feature entity <-> model mappers

use vote_core::entities::{Feature, RankedFeature};
use vote_core::value_objects::Snowflake;

use crate::models::RankedFeatureModel;

/// Convert RankedFeatureModel to RankedFeature entity
impl From<RankedFeatureModel> for RankedFeature {
    fn from(model: RankedFeatureModel) -> Self {
        RankedFeature {
            feature: Feature {
                id: Snowflake::new(model.id),
                title: model.title,
                description: model.description,
                owner_id: Snowflake::new(model.owner_id),
                created_at: model.created_at,
            },
            vote_count: model.vote_count,
            voted: model.voted,
        }
    }
}
