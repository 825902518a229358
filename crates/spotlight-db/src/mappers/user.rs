//! User entity <-> model mapper

use spotlight_core::entities::User;
use spotlight_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            trust_score: model.trust_score,
            is_matched: model.is_matched,
            matched_with: model.matched_with.map(UserId::new),
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
