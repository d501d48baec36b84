//! Application startup and lifecycle management.
//!
//! Binds the listener (port 0 supported for tests), assembles the router,
//! and serves until a shutdown signal arrives.

use crate::config::BfhlConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::TextProvider;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::mock::MockTextProvider;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Maximum accepted request body size (10 KB).
const BODY_LIMIT_BYTES: usize = 10 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: BfhlConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: BfhlConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> = if config.gemini.api_key.is_empty() {
            tracing::info!("Gemini API key not set, using mock text provider");
            Arc::new(MockTextProvider::with_response("Mock response"))
        } else {
            tracing::info!(model = %config.gemini.model, "Initialized Gemini text provider");
            Arc::new(GeminiTextProvider::new(GeminiConfig {
                api_key: config.gemini.api_key.clone(),
                model: config.gemini.model.clone(),
            }))
        };

        Self::build_with_provider(config, text_provider).await
    }

    /// Build with an injected text provider; integration tests use this.
    pub async fn build_with_provider(
        config: BfhlConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config,
            text_provider,
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);

        tracing::info!(port = self.port, "Listening");

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Build the application router.
///
/// Method fallbacks on registered routes go to the same 404 handler as
/// unknown paths, so any unmatched path or method yields the 404 envelope.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(handlers::health::health_check).fallback(handlers::not_found),
        )
        .route(
            "/bfhl",
            post(handlers::bfhl::bfhl).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
