//! Spotlight entity <-> model mapper

use spotlight_core::entities::Spotlight;
use spotlight_core::traits::ActiveSpotlight;
use spotlight_core::value_objects::{Coordinates, SpotlightId, UserId};

use crate::models::{ActiveSpotlightModel, SpotlightModel};

impl From<SpotlightModel> for Spotlight {
    fn from(model: SpotlightModel) -> Self {
        Spotlight {
            id: SpotlightId::new(model.id),
            user_id: UserId::new(model.user_id),
            position: Coordinates::new(model.lat, model.lon),
            place: model.place,
            intent: model.intent,
            meet_time: model.meet_time,
            clue: model.clue,
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}

impl From<ActiveSpotlightModel> for ActiveSpotlight {
    fn from(model: ActiveSpotlightModel) -> Self {
        ActiveSpotlight {
            user_id: UserId::new(model.user_id),
            position: Coordinates::new(model.lat, model.lon),
            username: model.username,
            trust_score: model.trust_score,
        }
    }
}
