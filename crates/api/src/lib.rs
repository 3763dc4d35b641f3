//! # Interview Scheduler API
//!
//! The API crate provides the web server for the interview scheduler. It
//! registers users, records their availability and lists the one-hour slots
//! a candidate and an interviewer have in common.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into store calls and slot calculations
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment configuration
//! - **Doc**: OpenAPI document
//!
//! Handlers only depend on the [`UserStore`] interface; the binary decides
//! whether that is PostgreSQL or the in-memory store.

/// Configuration module for API settings
pub mod config;
/// OpenAPI document for the endpoints
pub mod doc;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::{Result, WrapErr};
use interview_db::UserStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use interview_api::ApiState;
/// use interview_db::InMemoryUserStore;
///
/// let state = Arc::new(ApiState::new(Arc::new(InMemoryUserStore::new())));
/// let app = interview_api::app(state);
/// ```
pub struct ApiState {
    /// Where users and their availability live
    pub store: Arc<dyn UserStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// Installs the global tracing subscriber at the given level
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Builds the router with every endpoint attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // User registration and search
        .merge(routes::users::routes())
        // Availability and slot matching
        .merge(routes::availability::routes())
        // OpenAPI document
        .merge(routes::docs::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and store
///
/// Applies CORS (when origins are configured), request tracing and the
/// request timeout on top of [`app`], then serves until the process ends.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn UserStore>) -> Result<()> {
    let state = Arc::new(ApiState::new(store));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin {origin:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Trace every request and bound how long one may take
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
