//! Click entity representing a single logged event.

use chrono::{DateTime, Utc};

/// A click event associating a user with a test group at a point in time.
///
/// Click records are append-only. Client metadata (user agent, IP address)
/// is optional to handle cases where the information is unavailable or
/// privacy settings restrict collection.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub user_id: i64,
    pub group_id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

impl Click {
    pub fn new(
        id: i64,
        user_id: i64,
        group_id: i64,
        timestamp: DateTime<Utc>,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            group_id,
            timestamp,
            user_agent,
            ip_address,
        }
    }
}

/// Input data for recording a new click event.
///
/// The timestamp is stamped by the handler layer at insert time. Neither
/// `user_id` nor `group_id` is checked for referential integrity here;
/// violations are the store's responsibility.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub user_id: i64,
    pub group_id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
