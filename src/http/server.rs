//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind the server to a listener

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::settings::Settings;
use crate::sitedata::SiteStore;

/// Per-request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Form posts are tiny; anything larger is abuse.
const MAX_BODY_BYTES: usize = 32 * 1024;

/// Outbound calls (Turnstile, Resend) must not hang a submission forever.
const OUTBOUND_TIMEOUT_SECS: u64 = 10;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SiteStore>,
    pub http: reqwest::Client,
    pub settings: Arc<Settings>,
}

/// HTTP server for the site backend.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server over the given settings and site store.
    pub fn new(settings: Arc<Settings>, store: Arc<SiteStore>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(OUTBOUND_TIMEOUT_SECS))
            .build()?;

        let state = AppState {
            store,
            http,
            settings,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(handlers::healthz))
            .route("/api/site", get(handlers::get_site))
            .route("/api/contact", post(handlers::post_contact))
            .with_state(state)
            .layer(
                // Outermost first. The timeout sits innermost, directly over
                // the routes, so its generated 408 uses the plain route body.
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                    .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS))),
            )
    }

    /// Serve until the listener is closed.
    pub async fn run(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router).await
    }
}
