//! User entity representing a registered test participant.

use chrono::{DateTime, Utc};

/// A registered user of the A/B test.
///
/// Users are created once on registration and never mutated or deleted by
/// this service. The id is assigned by the external data store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: i64, name: String, email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}

/// Input data for registering a new user.
///
/// The creation timestamp is stamped by the handler layer at insert time,
/// not by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
