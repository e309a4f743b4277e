//! Stock API Backend Server
//!
//! REST API server for managing stock records in PostgreSQL.

use anyhow::Context;
use std::sync::Arc;
use stock_api_backend::api::create_router;
use stock_api_backend::config::Config;
use stock_api_backend::db::DatabasePool;
use stock_api_backend::state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stock_api_backend::models::{HealthResponse, MutationResponse, Stock, StockRequest};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        stock_api_backend::api::handlers::health_check,
        stock_api_backend::api::handlers::create_stock,
        stock_api_backend::api::handlers::get_stock,
        stock_api_backend::api::handlers::get_all_stocks,
        stock_api_backend::api::handlers::update_stock,
        stock_api_backend::api::handlers::delete_stock,
    ),
    components(
        schemas(
            HealthResponse,
            Stock,
            StockRequest,
            MutationResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Stocks", description = "Stock record management"),
    ),
    info(
        title = "Stock API",
        version = "0.1.0",
        description = "REST API for managing stock records in PostgreSQL",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to the database and apply migrations
    let db = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    db.run_migrations()
        .await
        .context("Failed to run database migrations")?;

    // Create application state
    let state = Arc::new(AppState::with_database(db));

    info!(
        "Starting Stock API Backend on {}:{}",
        config.server.host, config.server.port
    );
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        config.server.host, config.server.port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
