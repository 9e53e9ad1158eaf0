//! User entity <-> model mapper

use vote_core::entities::User;
use vote_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash stays in the persistence layer; it never crosses
/// into the domain entity.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            created_at: model.created_at,
        }
    }
}
