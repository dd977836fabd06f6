//! Handlers for the statistics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{AllStatsResponse, GroupStatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for a specific group.
///
/// # Endpoint
///
/// `GET /stats/group/{group_id}`
///
/// # Response
///
/// ```json
/// {
///   "group_id": 5,
///   "total_clicks": 4,
///   "unique_users": 3,
///   "total_users": 10,
///   "ctr": 0.4,
///   "conversion_rate": 0.3
/// }
/// ```
///
/// # Errors
///
/// Returns 500 with a `Database error:`-prefixed detail on store failure.
pub async fn group_stats_handler(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<GroupStatsResponse>, AppError> {
    let stats = state.stats_service.group_stats(group_id).await?;

    Ok(Json(stats.into()))
}

/// Retrieves statistics for all groups, annotated with group names.
///
/// # Endpoint
///
/// `GET /stats/all`
///
/// Entries follow the store's listing order, one per existing group. A
/// failure computing any one group's statistics aborts the entire
/// response; there are no partial results.
///
/// # Errors
///
/// Returns 500 with a `Database error:`-prefixed detail on store failure.
pub async fn all_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<AllStatsResponse>, AppError> {
    let stats = state.stats_service.all_group_stats().await?;

    Ok(Json(AllStatsResponse {
        stats: stats.into_iter().map(Into::into).collect(),
    }))
}
