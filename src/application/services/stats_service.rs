//! Group statistics service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::repositories::{ClickRepository, GroupRepository, UserRepository};
use crate::error::AppError;

/// Aggregate click statistics for a single group.
///
/// `total_users` is the global user count, not scoped to the group — a
/// known approximation since no group-membership table exists. As a
/// consequence the ratios are in `[0, 1]` under normal data but unbounded
/// above 1 when a group's click count exceeds the global user count; they
/// are not clamped.
#[derive(Debug, Clone)]
pub struct GroupStats {
    pub group_id: i64,
    pub total_clicks: i64,
    pub unique_users: i64,
    pub total_users: i64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

/// Per-group statistics annotated with the group's display name.
#[derive(Debug, Clone)]
pub struct NamedGroupStats {
    pub group_name: String,
    pub stats: GroupStats,
}

/// Service computing click-through and conversion statistics per group.
pub struct StatsService {
    clicks: Arc<dyn ClickRepository>,
    users: Arc<dyn UserRepository>,
    groups: Arc<dyn GroupRepository>,
}

impl StatsService {
    pub fn new(
        clicks: Arc<dyn ClickRepository>,
        users: Arc<dyn UserRepository>,
        groups: Arc<dyn GroupRepository>,
    ) -> Self {
        Self {
            clicks,
            users,
            groups,
        }
    }

    /// Computes statistics for one group.
    ///
    /// Fetches the group's click rows, counts distinct clicking users
    /// among them, fetches the full user table for the global user count,
    /// and computes `ctr = total_clicks / total_users` and
    /// `conversion_rate = unique_users / total_users`. Both ratios are 0
    /// when the user count is 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure.
    pub async fn group_stats(&self, group_id: i64) -> Result<GroupStats, AppError> {
        let clicks = self.clicks.list_by_group(group_id).await?;

        let unique_users = clicks
            .iter()
            .map(|c| c.user_id)
            .collect::<HashSet<_>>()
            .len() as i64;

        let total_users = self.users.list_all().await?.len() as i64;
        let total_clicks = clicks.len() as i64;

        let (ctr, conversion_rate) = if total_users > 0 {
            (
                total_clicks as f64 / total_users as f64,
                unique_users as f64 / total_users as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(GroupStats {
            group_id,
            total_clicks,
            unique_users,
            total_users,
            ctr,
            conversion_rate,
        })
    }

    /// Computes statistics for every group, in the store's listing order.
    ///
    /// Per-group computations run strictly sequentially; a failure in any
    /// one aborts the whole aggregate with no partial results.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure.
    pub async fn all_group_stats(&self) -> Result<Vec<NamedGroupStats>, AppError> {
        let groups = self.groups.list_all().await?;

        let mut stats = Vec::with_capacity(groups.len());
        for group in groups {
            let group_stats = self.group_stats(group.id).await?;
            stats.push(NamedGroupStats {
                group_name: group.name,
                stats: group_stats,
            });
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, Group, User};
    use crate::domain::repositories::{
        MockClickRepository, MockGroupRepository, MockUserRepository,
    };
    use chrono::Utc;

    fn click(id: i64, user_id: i64, group_id: i64) -> Click {
        Click::new(id, user_id, group_id, Utc::now(), None, None)
    }

    fn user(id: i64) -> User {
        User::new(id, format!("user-{id}"), format!("u{id}@x.com"), Utc::now())
    }

    #[tokio::test]
    async fn test_group_stats_matches_literal_formula() {
        let mut clicks = MockClickRepository::new();
        let mut users = MockUserRepository::new();
        let groups = MockGroupRepository::new();

        // 4 click rows from users {1, 2, 2, 3} -> 3 distinct users.
        clicks
            .expect_list_by_group()
            .withf(|&g| g == 5)
            .times(1)
            .returning(|g| {
                Ok(vec![
                    click(1, 1, g),
                    click(2, 2, g),
                    click(3, 2, g),
                    click(4, 3, g),
                ])
            });

        users
            .expect_list_all()
            .times(1)
            .returning(|| Ok((1..=10).map(user).collect()));

        let service = StatsService::new(Arc::new(clicks), Arc::new(users), Arc::new(groups));

        let stats = service.group_stats(5).await.unwrap();

        assert_eq!(stats.group_id, 5);
        assert_eq!(stats.total_clicks, 4);
        assert_eq!(stats.unique_users, 3);
        assert_eq!(stats.total_users, 10);
        assert_eq!(stats.ctr, 0.4);
        assert_eq!(stats.conversion_rate, 0.3);
    }

    #[tokio::test]
    async fn test_group_stats_zero_users_yields_zero_ratios() {
        let mut clicks = MockClickRepository::new();
        let mut users = MockUserRepository::new();
        let groups = MockGroupRepository::new();

        clicks
            .expect_list_by_group()
            .times(1)
            .returning(|g| Ok(vec![click(1, 1, g)]));

        users.expect_list_all().times(1).returning(|| Ok(vec![]));

        let service = StatsService::new(Arc::new(clicks), Arc::new(users), Arc::new(groups));

        let stats = service.group_stats(1).await.unwrap();

        assert_eq!(stats.total_clicks, 1);
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.ctr, 0.0);
        assert_eq!(stats.conversion_rate, 0.0);
    }

    #[tokio::test]
    async fn test_group_stats_ratios_are_not_clamped() {
        let mut clicks = MockClickRepository::new();
        let mut users = MockUserRepository::new();
        let groups = MockGroupRepository::new();

        // More clicks than users in the global table.
        clicks
            .expect_list_by_group()
            .times(1)
            .returning(|g| Ok((1..=4).map(|i| click(i, i, g)).collect()));

        users
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![user(1), user(2)]));

        let service = StatsService::new(Arc::new(clicks), Arc::new(users), Arc::new(groups));

        let stats = service.group_stats(1).await.unwrap();

        assert_eq!(stats.ctr, 2.0);
        assert_eq!(stats.conversion_rate, 2.0);
    }

    #[tokio::test]
    async fn test_all_group_stats_preserves_listing_order() {
        let mut clicks = MockClickRepository::new();
        let mut users = MockUserRepository::new();
        let mut groups = MockGroupRepository::new();

        groups.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Group::new(2, "variant-b".to_string()),
                Group::new(1, "control".to_string()),
            ])
        });

        clicks
            .expect_list_by_group()
            .times(2)
            .returning(|_| Ok(vec![]));

        users.expect_list_all().times(2).returning(|| Ok(vec![]));

        let service = StatsService::new(Arc::new(clicks), Arc::new(users), Arc::new(groups));

        let stats = service.all_group_stats().await.unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].group_name, "variant-b");
        assert_eq!(stats[0].stats.group_id, 2);
        assert_eq!(stats[1].group_name, "control");
        assert_eq!(stats[1].stats.group_id, 1);
    }

    #[tokio::test]
    async fn test_all_group_stats_aborts_on_first_failure() {
        let mut clicks = MockClickRepository::new();
        let users = MockUserRepository::new();
        let mut groups = MockGroupRepository::new();

        groups.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Group::new(1, "control".to_string()),
                Group::new(2, "variant-b".to_string()),
            ])
        });

        // The first per-group computation fails; the second is never reached.
        clicks
            .expect_list_by_group()
            .times(1)
            .returning(|_| Err(AppError::store("select failed")));

        let service = StatsService::new(Arc::new(clicks), Arc::new(users), Arc::new(groups));

        let result = service.all_group_stats().await;

        assert!(matches!(result.unwrap_err(), AppError::Store { .. }));
    }
}
