//! Site data schema definitions.
//!
//! This module defines the validated configuration record served to page
//! renderers. All types derive Serde traits; field names follow the JSON
//! wire format the site templates consume (camelCase, except the analytics
//! block which keeps its snake_case key).
//!
//! Defaults here cover the *optional* fields only. Structural requirements
//! (non-empty brand name, at least one feature, length bounds) live in
//! `validation.rs`.

use serde::{Deserialize, Serialize};

/// Root of the validated site configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SiteData {
    /// Brand identity (name, tagline, contact details).
    pub brand: Brand,

    /// Service description: offer, feature cards, price menu.
    pub service: Service,

    /// Primary call-to-action shown across pages.
    #[serde(default)]
    pub cta: Cta,

    /// Analytics wiring (tag-manager container id).
    #[serde(default)]
    pub analytics: Analytics,
}

/// Brand identity block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Display name. Required, non-empty.
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    /// Service area shown in headers/footers (e.g. a city or ward).
    #[serde(default)]
    pub area: String,

    pub phone: Option<String>,

    /// Official LINE account URL. Must parse as a URL when present.
    pub line_url: Option<String>,

    /// Instagram profile URL. Must parse as a URL when present.
    pub instagram_url: Option<String>,

    pub address: Option<String>,
}

/// Service description block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Headline offer (e.g. a first-visit discount).
    #[serde(default)]
    pub primary_offer: String,

    /// Feature cards. Required, at least one element.
    pub features: Vec<Feature>,

    /// Price menu. Optional, defaults to empty.
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

/// A single feature card.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Feature {
    /// Icon identifier for the rendering layer.
    #[serde(default = "default_icon")]
    pub icon: String,

    /// 1–100 characters.
    pub title: String,

    /// 1–300 characters.
    pub description: String,
}

/// A price-menu row. No cross-field invariants.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MenuItem {
    pub name: String,

    /// Duration in minutes.
    pub duration: Option<f64>,

    pub price: f64,

    pub note: Option<String>,
}

/// Call-to-action block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    #[serde(default = "default_cta_text")]
    pub primary_text: String,

    #[serde(default = "default_cta_url")]
    pub primary_url: String,
}

impl Default for Cta {
    fn default() -> Self {
        Self {
            primary_text: default_cta_text(),
            primary_url: default_cta_url(),
        }
    }
}

/// Analytics block.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Analytics {
    pub gtm_container_id: Option<String>,
}

pub(crate) fn default_icon() -> String {
    "lucide:check-circle".to_string()
}

fn default_cta_text() -> String {
    "お問い合わせはこちら".to_string()
}

fn default_cta_url() -> String {
    "/contact".to_string()
}
