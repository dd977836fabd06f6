//! REST store implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use crate::infrastructure::store::rest_store::{RestStore, eq_filter};

const TABLE: &str = "clicks";

/// Wire representation of a click row as returned by the store.
#[derive(Debug, Deserialize)]
struct ClickRow {
    id: i64,
    user_id: i64,
    group_id: i64,
    timestamp: DateTime<Utc>,
    user_agent: Option<String>,
    ip_address: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::new(
            row.id,
            row.user_id,
            row.group_id,
            row.timestamp,
            row.user_agent,
            row.ip_address,
        )
    }
}

/// Wire representation of a click insert. The id is assigned by the store.
#[derive(Debug, Serialize)]
struct InsertClickRow {
    user_id: i64,
    group_id: i64,
    timestamp: DateTime<Utc>,
    user_agent: Option<String>,
    ip_address: Option<String>,
}

/// Click repository backed by the external REST store.
pub struct RestClickRepository {
    store: RestStore,
}

impl RestClickRepository {
    pub fn new(store: RestStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClickRepository for RestClickRepository {
    async fn insert_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = InsertClickRow {
            user_id: new_click.user_id,
            group_id: new_click.group_id,
            timestamp: new_click.timestamp,
            user_agent: new_click.user_agent,
            ip_address: new_click.ip_address,
        };

        let mut written: Vec<ClickRow> = self
            .store
            .insert(TABLE, &row)
            .await
            .map_err(|e| AppError::store(e.to_string()))?;

        match written.pop() {
            Some(row) => Ok(row.into()),
            None => Err(AppError::empty_write("Failed to log click")),
        }
    }

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<Click>, AppError> {
        let rows: Vec<ClickRow> = self
            .store
            .select(TABLE, &[("group_id", eq_filter(group_id))])
            .await
            .map_err(|e| AppError::store(e.to_string()))?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}
