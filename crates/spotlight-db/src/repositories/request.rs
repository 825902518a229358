//! PostgreSQL implementation of RequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use spotlight_core::entities::MatchRequest;
use spotlight_core::error::DomainError;
use spotlight_core::traits::{IncomingRequest, RepoResult, RequestRepository};
use spotlight_core::value_objects::{RequestId, UserId};

use crate::models::{IncomingRequestModel, RequestModel};

use super::error::map_db_error;

/// PostgreSQL implementation of RequestRepository
#[derive(Clone)]
pub struct PgRequestRepository {
    pool: PgPool,
}

impl PgRequestRepository {
    /// Create a new PgRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for PgRequestRepository {
    #[instrument(skip(self))]
    async fn create(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<MatchRequest> {
        let result = sqlx::query_as::<_, RequestModel>(
            r"
            INSERT INTO requests (sender_id, receiver_id)
            VALUES ($1, $2)
            RETURNING id, sender_id, receiver_id, status, matched, created_at
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        MatchRequest::try_from(result)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RequestId) -> RepoResult<Option<MatchRequest>> {
        let result = sqlx::query_as::<_, RequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, matched, created_at
            FROM requests
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MatchRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn pending_exists(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM requests
                WHERE sender_id = $1 AND receiver_id = $2 AND status = 'pending'
            )
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn latest_pending_for(&self, receiver_id: UserId) -> RepoResult<Option<IncomingRequest>> {
        let result = sqlx::query_as::<_, IncomingRequestModel>(
            r"
            SELECT r.id, r.sender_id, u.username AS sender_username
            FROM requests r
            JOIN users u ON u.id = r.sender_id
            WHERE r.receiver_id = $1 AND r.status = 'pending'
            ORDER BY r.created_at DESC
            LIMIT 1
            ",
        )
        .bind(receiver_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(IncomingRequest::from))
    }

    #[instrument(skip(self, request), fields(request_id = %request.id))]
    async fn accept(&self, request: &MatchRequest) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Claim the request. A concurrent accept or decline gets here first
        // and this update then matches zero rows.
        let claimed = sqlx::query(
            r"
            UPDATE requests
            SET status = 'accepted', matched = TRUE
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(request.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::RequestAlreadyResolved);
        }

        // Flip both users to matched, each conditioned on still being
        // unmatched. Either failing aborts the whole transition.
        for (user_id, partner_id) in [
            (request.receiver_id, request.sender_id),
            (request.sender_id, request.receiver_id),
        ] {
            let updated = sqlx::query(
                r"
                UPDATE users
                SET is_matched = TRUE, matched_with = $2
                WHERE id = $1 AND is_matched = FALSE
                ",
            )
            .bind(user_id.into_inner())
            .bind(partner_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if updated.rows_affected() == 0 {
                tx.rollback().await.map_err(map_db_error)?;
                return Err(DomainError::AlreadyMatched);
            }
        }

        // Matched users leave discovery immediately
        sqlx::query(
            r"
            DELETE FROM spotlights WHERE user_id IN ($1, $2)
            ",
        )
        .bind(request.sender_id.into_inner())
        .bind(request.receiver_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn decline(&self, id: RequestId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE requests
            SET status = 'declined'
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RequestAlreadyResolved);
        }

        Ok(())
    }
}
