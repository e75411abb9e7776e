//! Marketing-site backend: validated site configuration + contact form.

pub mod contact;
pub mod forms;
pub mod http;
pub mod observability;
pub mod settings;
pub mod sitedata;

pub use http::HttpServer;
pub use settings::Settings;
pub use sitedata::{SiteData, SiteStore};
