use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound shape of a workout submission.
///
/// Decoding is non-strict: unknown fields are ignored, and every field may
/// be omitted. Omitted numerics become zero and an omitted `started_at`
/// becomes the Unix epoch. `user_id` is deliberately NOT defaulted to an
/// empty string: an absent field stays `None` and is written as SQL NULL,
/// so the NOT NULL constraint on the column rejects it. An explicit empty
/// string is accepted and persisted as empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkoutRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub distance_meter: f64,
    #[serde(default = "default_started_at")]
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub seconds: i64,
}

fn default_started_at() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}
