use sqlx::MySqlPool;

use crate::dto::workout::CreateWorkoutRequest;
use crate::error::Result;
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert one workout and return the persisted row.
    ///
    /// `workout_id` and `created_at` come back from the database; an absent
    /// `user_id` is bound as NULL and rejected by the NOT NULL constraint.
    pub async fn insert(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let result = sqlx::query(
            r#"
            INSERT INTO workouts (user_id, distance_meter, started_at, seconds)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(req.user_id.as_deref())
        .bind(req.distance_meter)
        .bind(req.started_at.naive_utc())
        .bind(req.seconds)
        .execute(self.pool)
        .await?;

        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, user_id, distance_meter, started_at, seconds, created_at
            FROM workouts
            WHERE workout_id = ?
            "#,
        )
        .bind(result.last_insert_id())
        .fetch_one(self.pool)
        .await?;

        Ok(workout)
    }
}
