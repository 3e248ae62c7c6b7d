use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One persisted exercise session. `workout_id` and `created_at` are
/// assigned by the database on insert; a row is never mutated afterwards.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: u64,
    pub user_id: String,
    pub distance_meter: f64,
    pub started_at: NaiveDateTime,
    pub seconds: i64,
    pub created_at: DateTime<Utc>,
}
