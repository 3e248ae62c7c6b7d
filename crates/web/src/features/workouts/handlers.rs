use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::workout::CreateWorkoutRequest};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    post,
    path = "/insert",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout persisted"),
        (status = 400, description = "Body is not a valid workout"),
        (status = 405, description = "Only POST is accepted"),
        (status = 500, description = "Storage write failed")
    ),
    tag = "workouts"
)]
pub async fn insert_workout(State(db): State<Database>, body: Bytes) -> WebResult<Response> {
    let req: CreateWorkoutRequest = serde_json::from_slice(&body)
        .map_err(|e| WebError::BadRequest(format!("workout body did not parse: {e}")))?;

    // Audit line goes out before the write is attempted, so an entry may
    // exist for a record that never persisted.
    tracing::info!(
        user_id = ?req.user_id,
        distance_meter = req.distance_meter,
        started_at = %req.started_at,
        seconds = req.seconds,
        "insert workout"
    );

    let workout = services::record_workout(db.pool(), &req).await?;
    tracing::debug!(workout_id = workout.workout_id, "workout persisted");

    Ok(StatusCode::CREATED.into_response())
}
