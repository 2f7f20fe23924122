//! # Server Configuration
//!
//! This module contains the router, middleware stack and listener loop for
//! the VetNest API.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TRACE_ID_HEADER};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .route("/api/resources", get(handlers::resources::list_resources))
        .route("/api/listings", get(handlers::listings::list_listings))
        .route(
            "/api/applications",
            post(handlers::applications::submit_application),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(telemetry::trace_context_middleware))
}

/// CORS policy admitting only the configured frontend origin.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .expose_headers([header::LOCATION, TRACE_ID_HEADER.clone()]);

    match HeaderValue::from_str(&config.frontend_origin) {
        Ok(origin) => base.allow_origin(AllowOrigin::list([origin])),
        Err(err) => {
            tracing::warn!(
                origin = %config.frontend_origin,
                error = %err,
                "Frontend origin is not a valid header value; cross-origin requests are disabled"
            );
            base
        }
    }
}

/// Starts the server with the given configuration
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let addr = config
        .bind_addr()
        .with_context(|| format!("Invalid server address: {}", config.api_bind_addr))?;

    let profile = config.profile.clone();
    let state = AppState {
        config: Arc::new(config),
        db,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, %profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::readyz,
        crate::handlers::resources::list_resources,
        crate::handlers::listings::list_listings,
        crate::handlers::applications::submit_application,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::ResourceType,
            crate::handlers::types::HealthStatus,
            crate::handlers::types::ProviderDto,
            crate::handlers::types::ResourceItemDto,
            crate::handlers::types::ListingDto,
            crate::handlers::types::ApplicationDto,
            crate::handlers::types::ApplicationRequest,
            crate::error::ApiError,
        )
    ),
    tags(
        (name = "resources", description = "Veteran resource directory"),
        (name = "listings", description = "Rentable housing listings"),
        (name = "applications", description = "Housing application intake"),
    ),
    info(
        title = "VetNest API",
        description = "Directory, listing and application API for veteran housing",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
