//! Application startup and lifecycle management.

use crate::config::ConceptConfig;
use crate::handlers;
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::providers::pollinations::PollinationsImageProvider;
use crate::services::providers::{ImageProvider, TextProvider};
use crate::services::ConceptOrchestrator;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::permissive_with_credentials, metrics::metrics_middleware,
    tracing::request_id_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ConceptOrchestrator>,
}

impl AppState {
    pub fn new(text_provider: Arc<dyn TextProvider>, image_provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            orchestrator: Arc::new(ConceptOrchestrator::new(text_provider, image_provider)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/api/status", get(handlers::status))
        .route("/api/generate", post(handlers::generate_concept))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(permissive_with_credentials())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the Gemini and Pollinations providers.
    pub async fn build(config: ConceptConfig) -> Result<Self, AppError> {
        let gemini = GeminiTextProvider::new(config.gemini_config()).map_err(|e| {
            tracing::error!("Failed to initialize Gemini provider: {}", e);
            AppError::ConfigError(anyhow::anyhow!(e))
        })?;

        if gemini.is_configured() {
            tracing::info!(model = %config.gemini.model, "Initialized Gemini text provider");
        } else {
            tracing::warn!(
                "GEMINI_API_KEY is not set; every concept will use the fallback until it is"
            );
        }

        let text_provider: Arc<dyn TextProvider> = Arc::new(gemini);
        let image_provider: Arc<dyn ImageProvider> =
            Arc::new(PollinationsImageProvider::new(config.pollinations_config()));

        tracing::info!(
            endpoint = %config.images.api_base,
            model = %config.images.model,
            "Initialized Pollinations image provider"
        );

        Self::with_state(&config, AppState::new(text_provider, image_provider)).await
    }

    /// Build the application around pre-assembled state (port 0 = random port).
    pub async fn with_state(config: &ConceptConfig, state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
