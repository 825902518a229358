//! Check-in, check-out, and nearby discovery

use chrono::Utc;
use tracing::{debug, info, instrument};

use spotlight_core::entities::Spotlight;
use spotlight_core::traits::CheckIn;
use spotlight_core::value_objects::{Coordinates, UserId};

use crate::dto::{CheckInRequest, NearbyUser};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Discovery radius around the caller's reported position
pub const NEARBY_RADIUS_KM: f64 = 5.0;

/// Spotlight (check-in) service
pub struct SpotlightService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SpotlightService<'a> {
    /// Create a new SpotlightService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Go live: create or replace the user's check-in.
    ///
    /// The expiry window is wider when a meet time is announced, giving the
    /// other party time to show up.
    #[instrument(skip(self, request), fields(place = %request.place))]
    pub async fn check_in(
        &self,
        user_id: UserId,
        request: CheckInRequest,
    ) -> ServiceResult<Spotlight> {
        let now = Utc::now();
        let check_in = CheckIn {
            user_id,
            position: Coordinates::new(request.lat, request.lon),
            place: request.place,
            intent: request.intent,
            expires_at: Spotlight::expiry_for(now, request.meet_time.is_some()),
            meet_time: request.meet_time,
            clue: request.clue,
            created_at: now,
        };

        let spotlight = self.ctx.spotlight_repo().upsert(&check_in).await?;
        info!(user_id = %user_id, expires_at = %spotlight.expires_at, "Check-in live");

        Ok(spotlight)
    }

    /// Go dark: remove the user's check-in. No-op when none exists.
    #[instrument(skip(self))]
    pub async fn check_out(&self, user_id: UserId) -> ServiceResult<()> {
        self.ctx.spotlight_repo().delete_for_user(user_id).await?;
        info!(user_id = %user_id, "Check-out");
        Ok(())
    }

    /// All live, unmatched users within [`NEARBY_RADIUS_KM`] of the given
    /// position, excluding the caller. The store filters expiry, self, and
    /// matched owners; the distance predicate runs here as a linear scan.
    #[instrument(skip(self))]
    pub async fn nearby(&self, user_id: UserId, lat: f64, lon: f64) -> ServiceResult<Vec<NearbyUser>> {
        let origin = Coordinates::new(lat, lon);
        let active = self
            .ctx
            .spotlight_repo()
            .active_excluding(user_id, Utc::now())
            .await?;

        let total = active.len();
        let nearby: Vec<NearbyUser> = active
            .into_iter()
            .filter(|s| s.position.within_km(&origin, NEARBY_RADIUS_KM))
            .map(|s| NearbyUser {
                id: s.user_id,
                lat: s.position.lat,
                lon: s.position.lon,
                username: s.username,
                trust_score: s.trust_score,
            })
            .collect();

        debug!(candidates = total, within_radius = nearby.len(), "Nearby scan");
        Ok(nearby)
    }
}
