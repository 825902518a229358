//! Match request protocol: send, poll, respond, status

use tracing::{info, instrument};

use spotlight_core::entities::{MatchRequest, RequestAction};
use spotlight_core::error::DomainError;
use spotlight_core::value_objects::UserId;

use crate::dto::{
    CheckRequestsResponse, IncomingRequestData, MatchStatusResponse, RespondRequestRequest,
    SendRequestRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Match request service
pub struct MatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchService<'a> {
    /// Create a new MatchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a match request to another user.
    ///
    /// Self-targeting is rejected, as is a duplicate pending request for the
    /// same sender/receiver pair. A pending request in the opposite
    /// direction does not block, and a sender may hold pending requests to
    /// several receivers at once.
    #[instrument(skip(self, request), fields(receiver_id = %request.receiver_id))]
    pub async fn send_request(
        &self,
        sender_id: UserId,
        request: SendRequestRequest,
    ) -> ServiceResult<MatchRequest> {
        let receiver_id = request.receiver_id;

        if receiver_id == sender_id {
            return Err(DomainError::SelfRequest.into());
        }

        if self
            .ctx
            .user_repo()
            .find_by_id(receiver_id)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(receiver_id).into());
        }

        if self
            .ctx
            .request_repo()
            .pending_exists(sender_id, receiver_id)
            .await?
        {
            return Err(DomainError::RequestAlreadyPending.into());
        }

        let created = self
            .ctx
            .request_repo()
            .create(sender_id, receiver_id)
            .await?;

        info!(request_id = %created.id, sender_id = %sender_id, "Match request sent");
        Ok(created)
    }

    /// The receiver's most recent pending incoming request, if any.
    /// Clients poll this endpoint; there is no push channel.
    #[instrument(skip(self))]
    pub async fn check_requests(&self, receiver_id: UserId) -> ServiceResult<CheckRequestsResponse> {
        let incoming = self
            .ctx
            .request_repo()
            .latest_pending_for(receiver_id)
            .await?;

        Ok(match incoming {
            Some(req) => CheckRequestsResponse::Incoming {
                data: IncomingRequestData {
                    id: req.id,
                    username: req.sender_username,
                },
            },
            None => CheckRequestsResponse::None,
        })
    }

    /// Resolve a pending request.
    ///
    /// Accepting runs as one atomic transition in the store: the request is
    /// claimed while still pending, both users flip to mutually matched only
    /// if both are still unmatched, and both check-ins disappear. Any failed
    /// condition leaves everything untouched.
    #[instrument(skip(self, request), fields(request_id = %request.request_id, action = %request.action))]
    pub async fn respond(&self, request: RespondRequestRequest) -> ServiceResult<RequestAction> {
        let found = self
            .ctx
            .request_repo()
            .find_by_id(request.request_id)
            .await?
            .ok_or(DomainError::RequestNotFound(request.request_id))?;

        if !found.is_pending() {
            return Err(DomainError::RequestAlreadyResolved.into());
        }

        match request.action {
            RequestAction::Accept => {
                self.ctx.request_repo().accept(&found).await?;
                info!(
                    request_id = %found.id,
                    sender_id = %found.sender_id,
                    receiver_id = %found.receiver_id,
                    "Match established"
                );
            }
            RequestAction::Decline => {
                self.ctx.request_repo().decline(found.id).await?;
                info!(request_id = %found.id, "Request declined");
            }
        }

        Ok(request.action)
    }

    /// Current match state as shown to the user
    #[instrument(skip(self))]
    pub async fn match_status(&self, user_id: UserId) -> ServiceResult<MatchStatusResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let Some(partner_id) = user.matched_with.filter(|_| user.is_matched) else {
            return Ok(MatchStatusResponse::unmatched());
        };

        let partner = self
            .ctx
            .user_repo()
            .find_by_id(partner_id)
            .await?
            .ok_or(DomainError::UserNotFound(partner_id))?;

        Ok(MatchStatusResponse::matched_with(partner.username))
    }
}
