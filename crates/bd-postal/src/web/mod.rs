//! Web layer module
//!
//! The HTTP interface for the postal query service. Handlers are thin:
//! they delegate to the two dataset stores and serialize whatever comes
//! back. The stores are immutable after load, so the shared state carries
//! plain `Arc`s with no locking.

use anyhow::Result;
use axum::{Router, http::HeaderValue, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{
    config::Config,
    datasets::{DivisionStore, PostalStore},
};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod utils;

// Re-export commonly used types
pub use extractors::{RequestContext, SuggestionParams};
pub use responses::{ErrorResponse, handle_error, handle_result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub postal: Arc<PostalStore>,
    pub divisions: Arc<DivisionStore>,
    /// Application start time for uptime calculation
    pub start_time: chrono::DateTime<chrono::Utc>,
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    /// Create a new web server over the loaded stores
    pub fn new(
        config: Config,
        postal: Arc<PostalStore>,
        divisions: Arc<DivisionStore>,
    ) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;

        let app = Self::create_router(AppState {
            config,
            postal,
            divisions,
            start_time: chrono::Utc::now(),
        });

        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware
    ///
    /// Public so integration tests can drive the full stack without
    /// binding a socket.
    pub fn create_router(state: AppState) -> Router {
        let cors = cors_layer(&state.config);

        Router::new()
            // Health check endpoints
            .route("/health", get(handlers::health::health_check))
            .route("/ready", get(handlers::health::readiness_check))
            .route("/live", get(handlers::health::liveness_check))
            // OpenAPI documentation
            .merge(Self::openapi_routes())
            // Flat dataset: search, listings, drill-down
            .route("/suggestions", get(handlers::postal::suggestions))
            .route("/districts", get(handlers::postal::list_districts))
            .route("/divisions", get(handlers::postal::list_divisions))
            .route("/upazilas", get(handlers::postal::list_upazilas))
            .route("/division/{division}", get(handlers::postal::get_division))
            .route(
                "/division/{division}/districts",
                get(handlers::postal::division_districts),
            )
            .route(
                "/division/{division}/district/{district}/upazilas",
                get(handlers::postal::district_upazilas),
            )
            .route(
                "/division/{division}/district/{district}/upazila/{upazila}/postoffices",
                get(handlers::postal::upazila_post_offices),
            )
            // Division tree: prefix suggestions
            .route(
                "/suggestions/divisions/{query}",
                get(handlers::suggestions::suggest_divisions),
            )
            .route(
                "/suggestions/zilas/{division}/{query}",
                get(handlers::suggestions::suggest_zilas),
            )
            .route(
                "/suggestions/upazilas/{division}/{zila}/{query}",
                get(handlers::suggestions::suggest_upazilas),
            )
            // Middleware (applied in reverse order)
            .layer(cors)
            .layer(axum::middleware::from_fn(
                middleware::security_headers_middleware,
            ))
            .layer(axum::middleware::from_fn(
                middleware::request_logging_middleware,
            ))
            .with_state(state)
    }

    /// OpenAPI documentation routes
    fn openapi_routes() -> Router<AppState> {
        use utoipa_swagger_ui::SwaggerUi;

        Router::new().merge(
            SwaggerUi::new("/docs").url("/api/openapi.json", openapi::openapi_spec()),
        )
    }

    /// Start the web server (blocking)
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Serve with a notification when the server is actually listening or
    /// fails to bind, and shut down gracefully on SIGTERM/SIGINT.
    pub async fn serve_with_signal(
        self,
        ready_signal: tokio::sync::oneshot::Sender<Result<()>>,
    ) -> Result<()> {
        match tokio::net::TcpListener::bind(&self.addr).await {
            Ok(listener) => {
                // Signal that we're now actually listening on the port
                let _ = ready_signal.send(Ok(()));

                let shutdown_signal = async {
                    #[cfg(unix)]
                    {
                        use tokio::signal::unix::{SignalKind, signal};
                        let mut sigterm = signal(SignalKind::terminate())
                            .expect("failed to install SIGTERM handler");
                        let mut sigint = signal(SignalKind::interrupt())
                            .expect("failed to install SIGINT handler");

                        tokio::select! {
                            _ = sigterm.recv() => {
                                tracing::info!("Received SIGTERM, shutting down gracefully");
                            }
                            _ = sigint.recv() => {
                                tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
                            }
                        }
                    }

                    #[cfg(not(unix))]
                    {
                        use tokio::signal;
                        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
                        tracing::info!("Received Ctrl+C, shutting down gracefully");
                    }
                };

                axum::serve(listener, self.app)
                    .with_graceful_shutdown(shutdown_signal)
                    .await?;
                Ok(())
            }
            Err(bind_error) => {
                let bind_err_msg = format!("Failed to bind to {}: {}", self.addr, bind_error);
                let _ = ready_signal.send(Err(anyhow::anyhow!("{}", bind_err_msg)));
                Err(anyhow::anyhow!("{}", bind_err_msg))
            }
        }
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the CORS layer from the configured origin allowlist.
///
/// An empty list keeps the permissive default; otherwise only the listed
/// origins are allowed.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors.allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([axum::http::Method::GET])
    }
}
