//! REST store implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::store::rest_store::RestStore;

const TABLE: &str = "users";

/// Wire representation of a user row as returned by the store.
#[derive(Debug, Deserialize)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name, row.email, row.created_at)
    }
}

/// Wire representation of a user insert. The id is assigned by the store.
#[derive(Debug, Serialize)]
struct InsertUserRow {
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

/// User repository backed by the external REST store.
pub struct RestUserRepository {
    store: RestStore,
}

impl RestUserRepository {
    pub fn new(store: RestStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for RestUserRepository {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = InsertUserRow {
            name: new_user.name,
            email: new_user.email,
            created_at: new_user.created_at,
        };

        let mut written: Vec<UserRow> = self
            .store
            .insert(TABLE, &row)
            .await
            .map_err(|e| AppError::store(e.to_string()))?;

        match written.pop() {
            Some(row) => Ok(row.into()),
            None => Err(AppError::empty_write("Failed to register user")),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let rows: Vec<UserRow> = self
            .store
            .select(TABLE, &[])
            .await
            .map_err(|e| AppError::store(e.to_string()))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
