//! # vote-service
//!
//! Application layer implementing the business logic for authentication,
//! feature submission, ranking, and voting.

pub mod dto;
pub mod services;

// Re-export commonly used types
pub use dto::{
    AuthResponse, CastVoteRequest, CreateFeatureRequest, FeatureListResponse, FeatureResponse,
    HealthResponse, LoginRequest, ReadinessResponse, RegisterRequest,
};
pub use services::{
    AuthService, FeatureService, ServiceContext, ServiceError, ServiceResult, VoteService,
};
