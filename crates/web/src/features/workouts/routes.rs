use axum::{Router, routing::post};
use storage::Database;

use super::handlers::insert_workout;

pub fn routes() -> Router<Database> {
    Router::new().route("/insert", post(insert_workout))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
    use storage::Database;
    use tower::ServiceExt;

    /// Router wired to a pool that connects lazily to an address nothing
    /// listens on. Method and parse rejections never touch it; anything
    /// that reaches storage fails with a connection error.
    fn app() -> Router {
        let options = MySqlConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("nodb");
        let pool = MySqlPoolOptions::new().connect_lazy_with(options);
        crate::features::router().with_state(Database::from_pool(pool))
    }

    fn post_insert(body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/insert")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn non_post_methods_are_rejected() {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method(method.clone())
                        .uri("/insert")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "method {method} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let response = app().oneshot(post_insert("\"not-json\"")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_field_type_is_a_client_error() {
        let response = app()
            .oneshot(post_insert(r#"{"user_id": "runner-42", "seconds": "sixty"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn storage_failure_is_a_server_error() {
        // Well-formed body, unreachable database.
        let response = app()
            .oneshot(post_insert(
                r#"{"user_id": "runner-42", "distance_meter": 5000.0, "seconds": 1800}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
