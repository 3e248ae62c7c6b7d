use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::workouts::handlers::insert_workout,
        features::health::handlers::liveness,
    ),
    components(
        schemas(
            storage::dto::workout::CreateWorkoutRequest,
            storage::models::Workout,
            features::health::handlers::StatusResponse,
        )
    ),
    tags(
        (name = "workouts", description = "Workout ingestion endpoint"),
        (name = "health", description = "Service liveness"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting workout ingestion API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(strategy = ?config.database.strategy, "Configuration loaded successfully");

    let db = Database::new(config.database.connect_options())
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.ensure_schema()
        .await
        .context("Failed to ensure workout schema")?;
    tracing::info!("Workout table ready");

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::router())
        .layer(CorsLayer::permissive())
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
