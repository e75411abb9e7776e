//! Marketing-site backend server.
//!
//! # Architecture Overview
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                 SITE SERVER                   │
//!                       │                                               │
//!   GET /api/site       │  ┌────────┐   ┌─────────────────────────┐    │
//!   ────────────────────┼─▶│  http  │──▶│ sitedata store          │    │
//!                       │  │ server │   │  defaults ⊕ override    │    │
//!                       │  └────────┘   │  merge→sanitize→validate│◀───┼── customer JSON
//!                       │       │       │  TTL cache slot         │    │   (file / HTTP)
//!   POST /api/contact   │       ▼       └─────────────────────────┘    │
//!   ────────────────────┼─▶┌─────────┐  ┌──────────┐  ┌────────────┐   │
//!                       │  │ contact │─▶│turnstile │  │   mailer   │───┼──▶ Resend API
//!                       │  └─────────┘  │  verify  │  └────────────┘   │
//!                       │               └────┬─────┘                   │
//!                       └────────────────────┼─────────────────────────┘
//!                                            ▼
//!                                   Cloudflare siteverify
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;

use site_server::observability::{logging, metrics};
use site_server::{HttpServer, Settings, SiteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("site-server v0.1.0 starting");

    let settings = Settings::from_env().into_shared();

    tracing::info!(
        bind_address = %settings.bind_address,
        override_source = settings.customer_config_path.as_deref().unwrap_or("<none>"),
        reload_ttl_secs = settings.reload_ttl_secs,
        "Configuration loaded"
    );

    if let Some(raw) = &settings.metrics_address {
        match raw.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(metrics_address = %raw, "Failed to parse metrics address"),
        }
    }

    // Fatal when the compiled-in defaults do not validate.
    let store = Arc::new(SiteStore::from_settings(&settings)?);

    let listener = TcpListener::bind(&settings.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(settings, store)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
