//! Match request entity <-> model mapper

use spotlight_core::entities::{MatchRequest, RequestStatus};
use spotlight_core::error::DomainError;
use spotlight_core::traits::IncomingRequest;
use spotlight_core::value_objects::{RequestId, UserId};

use crate::models::{IncomingRequestModel, RequestModel};

impl TryFrom<RequestModel> for MatchRequest {
    type Error = DomainError;

    fn try_from(model: RequestModel) -> Result<Self, Self::Error> {
        let status = RequestStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("Unknown request status: {}", model.status))
        })?;

        Ok(MatchRequest {
            id: RequestId::new(model.id),
            sender_id: UserId::new(model.sender_id),
            receiver_id: UserId::new(model.receiver_id),
            status,
            matched: model.matched,
            created_at: model.created_at,
        })
    }
}

impl From<IncomingRequestModel> for IncomingRequest {
    fn from(model: IncomingRequestModel) -> Self {
        IncomingRequest {
            id: RequestId::new(model.id),
            sender_id: UserId::new(model.sender_id),
            sender_username: model.sender_username,
        }
    }
}
