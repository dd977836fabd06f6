//! Handler for the deployment info endpoint.

use axum::Json;

use crate::api::dto::info::DeploymentInfoResponse;

/// Returns static deployment guidance.
///
/// # Endpoint
///
/// `GET /deployment-info`
pub async fn deployment_info_handler() -> Json<DeploymentInfoResponse> {
    Json(DeploymentInfoResponse {
        message: "Axum backend for A/B click tracking",
        deployment_platforms: vec![
            "Docker: build the release image and run the binary",
            "Railway: connect the repo and deploy the Dockerfile",
            "Fly.io: fly launch with the release binary",
            "systemd: install the release binary as a service unit",
        ],
        environment_variables: vec![
            "SUPABASE_URL: base URL of the external data store",
            "SUPABASE_ANON_KEY: API key for the external data store",
            "LISTEN: bind address (default 0.0.0.0:8000)",
        ],
    })
}
