//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request
//! bodies with semantic constraints use validator for input validation.

pub mod clicks;
pub mod health;
pub mod info;
pub mod stats;
pub mod users;
