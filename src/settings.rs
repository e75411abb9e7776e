//! Environment-driven runtime settings.
//!
//! # Design Decisions
//! - All knobs come from the environment (the deployment platform injects
//!   them); every value has a default so an empty environment still serves
//!   the compiled-in site
//! - A missing or unparseable TTL disables caching rather than erroring,
//!   matching the "always reload" fallback the renderers expect

use std::env;
use std::sync::Arc;

/// Cloudflare Turnstile verification endpoint.
const DEFAULT_TURNSTILE_VERIFY_URL: &str =
    "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Resend transactional-email API base.
const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Test sender; replace in production.
const DEFAULT_CONTACT_FROM: &str = "onboarding@resend.dev";

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind address for the HTTP server.
    pub bind_address: String,

    /// Customer override source: filesystem path or http(s) URL. Unset means
    /// no override.
    pub customer_config_path: Option<String>,

    /// Site-data cache TTL in seconds; negative disables caching.
    pub reload_ttl_secs: i64,

    /// Turnstile server-side secret. Unset means every verification fails.
    pub turnstile_secret_key: Option<String>,

    /// Turnstile verification endpoint (overridable for tests).
    pub turnstile_verify_url: String,

    pub resend_api_key: Option<String>,

    /// Resend API base URL (overridable for tests).
    pub resend_api_url: String,

    /// Destination address for contact submissions.
    pub contact_to_email: Option<String>,

    pub contact_from_email: String,

    /// Optional Prometheus exporter bind address.
    pub metrics_address: Option<String>,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            customer_config_path: var("CUSTOMER_CONFIG_PATH"),
            reload_ttl_secs: parse_ttl(var("SITE_CONFIG_RELOAD_TTL_SECONDS")),
            turnstile_secret_key: var("TURNSTILE_SECRET_KEY"),
            turnstile_verify_url: var("TURNSTILE_VERIFY_URL")
                .unwrap_or_else(|| DEFAULT_TURNSTILE_VERIFY_URL.to_string()),
            resend_api_key: var("RESEND_API_KEY"),
            resend_api_url: var("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            contact_to_email: var("SITE_CONTACT_TO_EMAIL"),
            contact_from_email: var("SITE_CONTACT_FROM_EMAIL")
                .unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
            metrics_address: var("METRICS_ADDRESS"),
        }
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for Settings {
    /// Settings as if the environment were empty. Used by tests.
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            customer_config_path: None,
            reload_ttl_secs: -1,
            turnstile_secret_key: None,
            turnstile_verify_url: DEFAULT_TURNSTILE_VERIFY_URL.to_string(),
            resend_api_key: None,
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            contact_to_email: None,
            contact_from_email: DEFAULT_CONTACT_FROM.to_string(),
            metrics_address: None,
        }
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// String-encoded TTL; absent or malformed means caching disabled.
fn parse_ttl(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(-1)
}
