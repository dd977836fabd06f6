//! # A/B Test Backend
//!
//! A minimal HTTP API that records user registrations and click events
//! for an A/B test and computes aggregate click-through/conversion
//! statistics per test group. All persistent storage is delegated to an
//! external relational database service reachable over HTTP; this service
//! performs no durable storage itself.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Tracking and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - REST client for the external store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SUPABASE_URL="https://project.supabase.co"
//! export SUPABASE_ANON_KEY="anon-key"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{StatsService, TrackingService};
    pub use crate::domain::entities::{Click, Group, NewClick, NewUser, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
