//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{CastVoteRequest, CreateFeatureRequest, LoginRequest, RegisterRequest};
pub use responses::{
    AuthResponse, FeatureListResponse, FeatureResponse, HealthChecks, HealthResponse,
    ReadinessResponse,
};
