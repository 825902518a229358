//! PostgreSQL implementation of SpotlightRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use spotlight_core::entities::Spotlight;
use spotlight_core::traits::{ActiveSpotlight, CheckIn, RepoResult, SpotlightRepository};
use spotlight_core::value_objects::UserId;

use crate::models::{ActiveSpotlightModel, SpotlightModel};

use super::error::map_db_error;

/// PostgreSQL implementation of SpotlightRepository
#[derive(Clone)]
pub struct PgSpotlightRepository {
    pool: PgPool,
}

impl PgSpotlightRepository {
    /// Create a new PgSpotlightRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpotlightRepository for PgSpotlightRepository {
    #[instrument(skip(self, check_in), fields(user_id = %check_in.user_id))]
    async fn upsert(&self, check_in: &CheckIn) -> RepoResult<Spotlight> {
        // One live check-in per user: a repeat check-in replaces the row
        // in place, keyed on user_id.
        let result = sqlx::query_as::<_, SpotlightModel>(
            r"
            INSERT INTO spotlights (user_id, lat, lon, place, intent, meet_time, clue, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE SET
                lat = EXCLUDED.lat,
                lon = EXCLUDED.lon,
                place = EXCLUDED.place,
                intent = EXCLUDED.intent,
                meet_time = EXCLUDED.meet_time,
                clue = EXCLUDED.clue,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
            RETURNING id, user_id, lat, lon, place, intent, meet_time, clue, created_at, expires_at
            ",
        )
        .bind(check_in.user_id.into_inner())
        .bind(check_in.position.lat)
        .bind(check_in.position.lon)
        .bind(&check_in.place)
        .bind(&check_in.intent)
        .bind(&check_in.meet_time)
        .bind(&check_in.clue)
        .bind(check_in.created_at)
        .bind(check_in.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Spotlight::from(result))
    }

    #[instrument(skip(self))]
    async fn delete_for_user(&self, user_id: UserId) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM spotlights WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn active_excluding(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<ActiveSpotlight>> {
        let rows = sqlx::query_as::<_, ActiveSpotlightModel>(
            r"
            SELECT s.user_id, s.lat, s.lon, u.username, u.trust_score
            FROM spotlights s
            JOIN users u ON u.id = s.user_id
            WHERE s.expires_at > $2
              AND s.user_id <> $1
              AND u.is_matched = FALSE
            ",
        )
        .bind(user_id.into_inner())
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ActiveSpotlight::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_repository_is_send_sync() {
        assert_send_sync::<PgSpotlightRepository>();
    }
}
