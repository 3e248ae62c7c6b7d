use axum::{Router, routing::any};
use storage::Database;

use super::handlers::liveness;

pub fn routes() -> Router<Database> {
    // Catch-all: any path no other route claims answers with the
    // liveness payload.
    Router::new()
        .route("/", any(liveness))
        .fallback(liveness)
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{Value, json};
    use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
    use storage::Database;
    use tower::ServiceExt;

    fn app() -> Router {
        let options = MySqlConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("nodb");
        let pool = MySqlPoolOptions::new().connect_lazy_with(options);
        crate::features::router().with_state(Database::from_pool(pool))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "ok", "message": "Hello world."})
        );
    }

    #[tokio::test]
    async fn liveness_answers_any_method() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::from("ignored"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unmatched_paths_fall_back_to_liveness() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/no-such-path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "ok", "message": "Hello world."})
        );
    }
}
