#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use abtest_backend::application::services::{StatsService, TrackingService};
use abtest_backend::domain::entities::{Click, Group, NewClick, NewUser, User};
use abtest_backend::domain::repositories::{ClickRepository, GroupRepository, UserRepository};
use abtest_backend::error::AppError;
use abtest_backend::state::AppState;
use async_trait::async_trait;
use axum::Router;
use chrono::Utc;

/// Backing data and failure switches for the in-memory store double.
#[derive(Default)]
struct StoreData {
    users: Vec<User>,
    clicks: Vec<Click>,
    groups: Vec<Group>,
    fail_user_insert: bool,
    fail_click_insert: bool,
    fail_click_select_group: Option<i64>,
    empty_user_insert: bool,
    empty_click_insert: bool,
}

/// In-memory stand-in for the external data store.
///
/// Assigns sequential ids per table starting at 1 and returns rows in
/// insertion order, matching the store contract the handlers rely on.
/// Failure switches let tests exercise the store-error paths.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<StoreData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_group(&self, id: i64, name: &str) {
        let mut data = self.data.lock().unwrap();
        data.groups.push(Group::new(id, name.to_string()));
    }

    pub fn seed_user(&self, name: &str, email: &str) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.users.len() as i64 + 1;
        data.users
            .push(User::new(id, name.to_string(), email.to_string(), Utc::now()));
        id
    }

    pub fn seed_click(&self, user_id: i64, group_id: i64) {
        let mut data = self.data.lock().unwrap();
        let id = data.clicks.len() as i64 + 1;
        data.clicks
            .push(Click::new(id, user_id, group_id, Utc::now(), None, None));
    }

    pub fn fail_user_insert(&self) {
        self.data.lock().unwrap().fail_user_insert = true;
    }

    pub fn fail_click_insert(&self) {
        self.data.lock().unwrap().fail_click_insert = true;
    }

    pub fn fail_click_select_for(&self, group_id: i64) {
        self.data.lock().unwrap().fail_click_select_group = Some(group_id);
    }

    /// Makes the next user inserts succeed at the wire level while
    /// writing no row, the way the store reports a logical-empty write.
    pub fn empty_user_insert(&self) {
        self.data.lock().unwrap().empty_user_insert = true;
    }

    /// Makes the next click inserts succeed at the wire level while
    /// writing no row, the way the store reports a logical-empty write.
    pub fn empty_click_insert(&self) {
        self.data.lock().unwrap().empty_click_insert = true;
    }

    pub fn user_count(&self) -> usize {
        self.data.lock().unwrap().users.len()
    }

    pub fn click_count(&self) -> usize {
        self.data.lock().unwrap().clicks.len()
    }

    pub fn clicks(&self) -> Vec<Click> {
        self.data.lock().unwrap().clicks.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.data.lock().unwrap().users.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut data = self.data.lock().unwrap();
        if data.fail_user_insert {
            return Err(AppError::store("user insert rejected"));
        }
        if data.empty_user_insert {
            return Err(AppError::empty_write("Failed to register user"));
        }

        let id = data.users.len() as i64 + 1;
        let user = User::new(id, new_user.name, new_user.email, new_user.created_at);
        data.users.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.data.lock().unwrap().users.clone())
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn insert_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut data = self.data.lock().unwrap();
        if data.fail_click_insert {
            return Err(AppError::store("click insert rejected"));
        }
        if data.empty_click_insert {
            return Err(AppError::empty_write("Failed to log click"));
        }

        let id = data.clicks.len() as i64 + 1;
        let click = Click::new(
            id,
            new_click.user_id,
            new_click.group_id,
            new_click.timestamp,
            new_click.user_agent,
            new_click.ip_address,
        );
        data.clicks.push(click.clone());
        Ok(click)
    }

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<Click>, AppError> {
        let data = self.data.lock().unwrap();
        if data.fail_click_select_group == Some(group_id) {
            return Err(AppError::store("click select rejected"));
        }

        Ok(data
            .clicks
            .iter()
            .filter(|c| c.group_id == group_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GroupRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(self.data.lock().unwrap().groups.clone())
    }
}

/// Builds application state wired to the given store double.
pub fn create_test_state(store: InMemoryStore) -> AppState {
    let users = Arc::new(store.clone());
    let clicks = Arc::new(store.clone());
    let groups = Arc::new(store);

    let tracking_service = Arc::new(TrackingService::new(users.clone(), clicks.clone()));
    let stats_service = Arc::new(StatsService::new(clicks, users, groups));

    AppState::new(tracking_service, stats_service)
}

/// Builds the full API router for the given state.
pub fn app(state: AppState) -> Router {
    abtest_backend::api::routes::routes().with_state(state)
}
