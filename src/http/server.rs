//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the recipe routes
//! - Wire up middleware (request id, tracing, metrics, timeout, limits, CORS)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::request_id;
use crate::observability::metrics;
use crate::recipes::RecipeService;
use crate::storage::JsonFileStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub recipes: RecipeService,
}

/// HTTP server for the recipe API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server over an existing service.
    pub fn new(config: ServiceConfig, recipes: RecipeService) -> Self {
        let router = build_router(&config, AppState { recipes });
        Self { router, config }
    }

    /// Create a server backed by the JSON file named in `config.storage`.
    pub fn from_config(config: ServiceConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.storage.data_file.clone()));
        Self::new(config, RecipeService::new(store))
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server on `listener` until `shutdown` fires, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            data_file = %self.config.storage.data_file.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    let router = Router::new()
        .route(
            "/api/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    if config.cors.enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
