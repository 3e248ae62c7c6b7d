use axum::Router;
use storage::Database;

pub mod health;
pub mod workouts;

pub fn router() -> Router<Database> {
    Router::new()
        .merge(workouts::routes::routes())
        .merge(health::routes::routes())
}
