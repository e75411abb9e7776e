//! Site configuration subsystem.
//!
//! # Data Flow
//! ```text
//! customer override (file path or HTTP URL, untrusted JSON)
//!     → source.rs (load & parse; failure ⇒ empty override)
//!     → merge.rs (deep merge onto compiled-in defaults)
//!     → sanitize.rs (forbidden-word redaction, features only)
//!     → validation.rs (strict, fail-closed typing + defaulting)
//!     → SiteData (validated, immutable)
//!     → store.rs cache slot (TTL-gated) → page renderers
//! ```
//!
//! # Design Decisions
//! - Two-phase pipeline: merging happens on untyped `serde_json::Value`,
//!   typing only after sanitization, so merged data is never trusted directly
//! - Override loading is best-effort by contract: any failure degrades to
//!   the defaults and is only visible as a warning
//! - Site data is immutable once validated; a change requires recomputation

pub mod merge;
pub mod sanitize;
pub mod schema;
pub mod source;
pub mod store;
pub mod validation;

pub use schema::{Brand, Cta, Feature, MenuItem, Service, SiteData};
pub use store::{SiteStore, StoreError};
pub use validation::{FieldError, ValidationError};
