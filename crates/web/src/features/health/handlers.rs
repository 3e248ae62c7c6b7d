use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Liveness probe. Touches no storage and answers any method.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn liveness() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Hello world.".to_string(),
    })
}
