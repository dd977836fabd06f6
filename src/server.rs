//! HTTP server initialization and runtime setup.
//!
//! Wires the store client, repositories, and services together and runs
//! the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::store::{
    RestClickRepository, RestGroupRepository, RestStore, RestUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::{
    application::services::{StatsService, TrackingService},
    domain::repositories::{ClickRepository, GroupRepository, UserRepository},
};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - REST client for the external data store
/// - Repositories and application services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the server bind fails or a runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let store = RestStore::new(&config.store_url, &config.store_api_key);
    tracing::info!("Store client initialized for {}", config.store_url);

    let user_repository: Arc<dyn UserRepository> =
        Arc::new(RestUserRepository::new(store.clone()));
    let click_repository: Arc<dyn ClickRepository> =
        Arc::new(RestClickRepository::new(store.clone()));
    let group_repository: Arc<dyn GroupRepository> = Arc::new(RestGroupRepository::new(store));

    let tracking_service = Arc::new(TrackingService::new(
        user_repository.clone(),
        click_repository.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(
        click_repository,
        user_repository,
        group_repository,
    ));

    let state = AppState::new(tracking_service, stats_service);

    let app = app_router(state, &config.allowed_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
