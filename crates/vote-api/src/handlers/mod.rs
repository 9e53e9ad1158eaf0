//! Request handlers

pub mod auth;
pub mod features;
pub mod health;
pub mod votes;
