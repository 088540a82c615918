//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, panic recovery)
//! - Build the shared state: route table, module registry, session store
//! - Run the session sweeper alongside the listener
//! - Serve until the shutdown broadcast fires

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::routing::{any, get, post};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::http::session::{run_sweeper, SessionStore};
use crate::http::{actions, handlers, status};
use crate::observability::diagnostics::{DiagnosticSink, TracingSink};
use crate::pages::{CatalogProvider, ModuleRegistry, PageProvider};
use crate::routing::{site_table, RouteTable, RouteTableError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub registry: Arc<ModuleRegistry>,
    pub sessions: Arc<SessionStore>,
    pub sink: Arc<dyn DiagnosticSink>,
    /// How long a page request waits for its module.
    pub suspense: Duration,
    pub started: Instant,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteTableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Innermost layer: a panicking handler answers with the application error
/// page instead of dropping the connection.
fn catch_panics() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handlers::panic_response as PanicHandler)
}

/// HTTP server for the site.
pub struct SiteServer {
    router: Router,
    config: SiteConfig,
    state: AppState,
}

impl SiteServer {
    /// Create a server serving the built-in page catalogue.
    pub fn new(config: SiteConfig) -> Result<Self, ServerError> {
        let provider = Arc::new(CatalogProvider::new(&config.pages));
        Self::with_provider(config, provider, Arc::new(TracingSink))
    }

    /// Create a server with a custom page provider and diagnostic sink.
    pub fn with_provider(
        config: SiteConfig,
        provider: Arc<dyn PageProvider>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ServerError> {
        let table = Arc::new(site_table()?);
        let registry = Arc::new(ModuleRegistry::new(provider));
        let sessions = Arc::new(SessionStore::new(
            &config.sessions,
            &config.preload,
            Arc::clone(&table),
            Arc::clone(&registry),
            Arc::clone(&sink),
        ));

        let state = AppState {
            table,
            registry,
            sessions,
            sink,
            suspense: Duration::from_millis(config.timeouts.suspense_ms),
            started: Instant::now(),
        };

        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id,
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        Router::new()
            .route("/_site/guard/retry", post(actions::guard_retry))
            .route("/_site/guard/home", post(actions::guard_home))
            .route("/_site/test/error/render", post(actions::test_render_error))
            .route("/_site/test/error/event", post(actions::test_event_error))
            .route("/_site/test/error/async", post(actions::test_async_error))
            .route("/_site/preload", post(actions::preload))
            .route("/_site/contact", post(actions::contact))
            .route("/_site/status", get(status::status))
            .route("/_site/modules", get(status::modules))
            .route("/", any(handlers::page))
            .route("/{*path}", any(handlers::page))
            .with_state(state)
            .layer(catch_panics())
            .layer(middleware)
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let sweeper = tokio::spawn(run_sweeper(
            Arc::clone(&self.state.sessions),
            Duration::from_secs(self.config.sessions.sweep_interval_secs),
            shutdown.resubscribe(),
        ));

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        let _ = sweeper.await;
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Shared state, for tests and embedding.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
