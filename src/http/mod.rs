//! HTTP surface of the site backend.

pub mod handlers;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
