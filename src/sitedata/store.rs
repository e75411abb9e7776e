//! Cached site-data accessor.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults (content/site.default.json, embedded)
//!     + customer override (source.rs: file or HTTP, degrades to {})
//!     → merge.rs (deep merge)
//!     → sanitize.rs (forbidden-word redaction of features)
//!     → validation.rs (typed, defaulted SiteData)
//!     → cache slot (ArcSwapOption, TTL-gated)
//!     → page renderers
//! ```
//!
//! # Design Decisions
//! - The cache is a single owned slot, passed around explicitly via the
//!   store; initialized empty, replaced atomically on recomputation, no
//!   teardown
//! - No lock guards the slot: concurrent misses may both recompute and both
//!   store — the pipeline is pure, so last-writer-wins is correct, just
//!   wasted work
//! - Override failures degrade to an empty override (warning logged); the
//!   only request-time failure is a post-merge validation error
//! - Defaults that fail validation abort construction: that is a build-time
//!   fault, not a request-time one

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use arc_swap::ArcSwapOption;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::observability::metrics;
use crate::settings::Settings;
use crate::sitedata::merge::deep_merge;
use crate::sitedata::sanitize::sanitize_features;
use crate::sitedata::schema::SiteData;
use crate::sitedata::source::load_override;
use crate::sitedata::validation::{validate, ValidationError};

/// Compiled-in default site configuration.
const DEFAULT_SITE_JSON: &str = include_str!("../../content/site.default.json");

/// Bound on any single override fetch (collaborator contract: a hanging
/// endpoint must not stall page renders forever).
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Fatal construction errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("embedded default site config is not valid JSON: {0}")]
    DefaultsParse(#[from] serde_json::Error),

    #[error("embedded default site config failed validation: {0}")]
    DefaultsInvalid(#[from] ValidationError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A validated configuration paired with the instant it was computed.
/// Replaced wholesale on each recomputation, never mutated in place.
struct CacheEntry {
    data: Arc<SiteData>,
    ts: u64,
}

/// Owner of the site-data pipeline and its cache slot.
pub struct SiteStore {
    defaults: Value,
    source: Option<String>,
    ttl_secs: i64,
    client: reqwest::Client,
    cache: ArcSwapOption<CacheEntry>,
}

impl SiteStore {
    /// Build a store over the embedded defaults using environment settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        Self::new(
            embedded_defaults()?,
            settings.customer_config_path.clone(),
            settings.reload_ttl_secs,
        )
    }

    /// Build a store over explicit defaults.
    ///
    /// Fails if `defaults` do not validate on their own: serving a site whose
    /// baseline is broken is a configuration fault, not a request error.
    pub fn new(defaults: Value, source: Option<String>, ttl_secs: i64) -> Result<Self, StoreError> {
        validate(&defaults)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            defaults,
            source,
            ttl_secs,
            client,
            cache: ArcSwapOption::const_empty(),
        })
    }

    /// Return the current validated site data.
    ///
    /// Served from cache when a fresh entry exists (no I/O, no re-merge,
    /// no re-validation); otherwise the full load → merge → sanitize →
    /// validate pipeline runs and the slot is replaced.
    pub async fn site_data(&self) -> Result<Arc<SiteData>, ValidationError> {
        let now = epoch_millis();

        if let Some(entry) = self.cache.load_full() {
            if self.ttl_secs >= 0
                && now.saturating_sub(entry.ts) < (self.ttl_secs as u64).saturating_mul(1000)
            {
                metrics::record_cache_lookup("hit");
                return Ok(Arc::clone(&entry.data));
            }
        }
        metrics::record_cache_lookup("miss");

        let override_value = match load_override(&self.client, self.source.as_deref()).await {
            Ok(value) => {
                metrics::record_override_load("ok");
                value
            }
            Err(e) => {
                metrics::record_override_load("error");
                tracing::warn!(error = %e, "failed to load customer override, serving defaults");
                Value::Object(Map::new())
            }
        };

        let mut merged = deep_merge(&self.defaults, &override_value);
        sanitize_features(&mut merged);
        let data = Arc::new(validate(&merged)?);

        self.cache.store(Some(Arc::new(CacheEntry {
            data: Arc::clone(&data),
            ts: now,
        })));

        Ok(data)
    }
}

/// Parse the embedded default configuration.
pub fn embedded_defaults() -> Result<Value, serde_json::Error> {
    serde_json::from_str(DEFAULT_SITE_JSON)
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
