//! # CareSync API
//!
//! The API crate provides the web server for the CareSync scheduling service.
//! It exposes REST endpoints for appointments, caregiver availability,
//! patient feedback, and user accounts.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Thin request glue over the stores and the booking rules in `caresync-core`
//! - **Middleware**: Password hashing and error-to-response mapping
//! - **Config**: Environment configuration
//!
//! Handlers reach persistence only through the store traits held in
//! [`ApiState`], so tests can run the full router against mock stores.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use caresync_core::store::{AppointmentStore, AvailabilityStore, FeedbackStore, UserStore};
use caresync_db::{
    DbPool,
    store::{PgAppointmentStore, PgAvailabilityStore, PgFeedbackStore, PgUserStore},
};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # async fn example(db_pool: caresync_db::DbPool) {
/// use std::sync::Arc;
/// use caresync_api::{ApiState, router};
///
/// let app = router(Arc::new(ApiState::from_pool(db_pool)));
/// # }
/// ```
pub struct ApiState {
    pub appointments: Arc<dyn AppointmentStore>,
    pub availabilities: Arc<dyn AvailabilityStore>,
    pub feedback: Arc<dyn FeedbackStore>,
    pub users: Arc<dyn UserStore>,
}

impl ApiState {
    /// Builds the state with Postgres-backed stores sharing one pool.
    pub fn from_pool(db_pool: DbPool) -> Self {
        Self {
            appointments: Arc::new(PgAppointmentStore::new(db_pool.clone())),
            availabilities: Arc::new(PgAvailabilityStore::new(db_pool.clone())),
            feedback: Arc::new(PgFeedbackStore::new(db_pool.clone())),
            users: Arc::new(PgUserStore::new(db_pool)),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_tracing(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Builds the application router with every endpoint and request tracing.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment booking and lifecycle endpoints
        .merge(routes::appointment::routes())
        // Caregiver availability endpoints
        .merge(routes::availability::routes())
        // Patient feedback endpoints
        .merge(routes::feedback::routes())
        // Account endpoints
        .merge(routes::user::routes())
        .layer(TraceLayer::new_for_http())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true))
}

/// Starts the API server with the provided configuration and database connection
///
/// # Example
///
/// ```no_run
/// # async fn example() -> eyre::Result<()> {
/// use caresync_api::{config::ApiConfig, start_server};
///
/// let config = ApiConfig::from_env()?;
/// let db_pool = caresync_db::create_pool(&config.database_url, config.database_max_connections).await?;
/// start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    let state = Arc::new(ApiState::from_pool(db_pool));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
