//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::{
    CheckInRequest, LoginRequest, RegisterRequest, RespondRequestRequest, SendRequestRequest,
};
pub use responses::{
    CheckRequestsResponse, IncomingRequestData, MatchStatusResponse, NearbyUser, StatusResponse,
    UserInfoResponse,
};
