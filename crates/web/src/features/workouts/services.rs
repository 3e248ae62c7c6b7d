use sqlx::MySqlPool;
use storage::{
    dto::workout::CreateWorkoutRequest, error::Result, models::Workout,
    repository::workout::WorkoutRepository,
};

/// Persist one workout submission and hand back the stored row.
pub async fn record_workout(pool: &MySqlPool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.insert(request).await
}
