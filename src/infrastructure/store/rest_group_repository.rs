//! REST store implementation of the group repository.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::Group;
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;
use crate::infrastructure::store::rest_store::RestStore;

const TABLE: &str = "groups";

/// Wire representation of a group row. The display name column is
/// `group_name` in the store schema.
#[derive(Debug, Deserialize)]
struct GroupRow {
    id: i64,
    group_name: String,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group::new(row.id, row.group_name)
    }
}

/// Group repository backed by the external REST store.
pub struct RestGroupRepository {
    store: RestStore,
}

impl RestGroupRepository {
    pub fn new(store: RestStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GroupRepository for RestGroupRepository {
    async fn list_all(&self) -> Result<Vec<Group>, AppError> {
        let rows: Vec<GroupRow> = self
            .store
            .select(TABLE, &[])
            .await
            .map_err(|e| AppError::store(e.to_string()))?;

        Ok(rows.into_iter().map(Group::from).collect())
    }
}
