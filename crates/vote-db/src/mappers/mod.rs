//! Entity <-> model mappers

mod feature;
mod user;
