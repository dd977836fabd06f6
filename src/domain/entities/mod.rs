//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. All of them
//! are owned and persisted by the external data store; this service never
//! holds them beyond the lifetime of one request.
//!
//! # Entity Types
//!
//! - [`User`] - A registered test participant
//! - [`Click`] - A logged click event
//! - [`Group`] - A named A/B test bucket
//!
//! Creation uses separate `NewUser` / `NewClick` structs without the
//! store-assigned id. Groups are read-only, so no creation type exists.

pub mod click;
pub mod group;
pub mod user;

pub use click::{Click, NewClick};
pub use group::Group;
pub use user::{NewUser, User};
