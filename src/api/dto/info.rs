//! DTO for the deployment info endpoint.

use serde::Serialize;

/// Static informational object describing deployment options and required
/// environment variables.
#[derive(Debug, Serialize)]
pub struct DeploymentInfoResponse {
    pub message: &'static str,
    pub deployment_platforms: Vec<&'static str>,
    pub environment_variables: Vec<&'static str>,
}
