//! DTOs for the statistics endpoints.

use serde::Serialize;

use crate::application::services::{GroupStats, NamedGroupStats};

/// Aggregate statistics for a single group.
///
/// `total_users` is the global user count; the ratios are not clamped and
/// may exceed 1 when a group's click count exceeds the global user count.
#[derive(Debug, Serialize)]
pub struct GroupStatsResponse {
    pub group_id: i64,
    pub total_clicks: i64,
    pub unique_users: i64,
    pub total_users: i64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

impl From<GroupStats> for GroupStatsResponse {
    fn from(stats: GroupStats) -> Self {
        Self {
            group_id: stats.group_id,
            total_clicks: stats.total_clicks,
            unique_users: stats.unique_users,
            total_users: stats.total_users,
            ctr: stats.ctr,
            conversion_rate: stats.conversion_rate,
        }
    }
}

/// One entry of the all-group listing: per-group statistics plus the
/// group's display name.
#[derive(Debug, Serialize)]
pub struct GroupStatsEntry {
    #[serde(flatten)]
    pub stats: GroupStatsResponse,
    pub group_name: String,
}

impl From<NamedGroupStats> for GroupStatsEntry {
    fn from(named: NamedGroupStats) -> Self {
        Self {
            stats: named.stats.into(),
            group_name: named.group_name,
        }
    }
}

/// Statistics for all groups, in the store's listing order.
#[derive(Debug, Serialize)]
pub struct AllStatsResponse {
    pub stats: Vec<GroupStatsEntry>,
}
