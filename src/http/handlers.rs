//! Request handlers.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;

use crate::contact::{self, ContactError, ContactForm};
use crate::observability::metrics;
use crate::http::server::AppState;

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}

/// Serve the validated site configuration to page renderers.
///
/// A failed override load is invisible here (the store degrades to the
/// defaults); only a post-merge validation failure produces an error.
pub async fn get_site(State(state): State<AppState>) -> Response {
    match state.store.site_data().await {
        Ok(data) => Json((*data).clone()).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "merged site config failed validation");
            let details: Vec<String> = e.errors.iter().map(ToString::to_string).collect();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "invalid_site_config", "details": details })),
            )
                .into_response()
        }
    }
}

/// Accept a contact-form submission.
pub async fn post_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    match contact::submit(&state.http, &state.settings, &form).await {
        Ok(()) => {
            metrics::record_contact_submission("ok");
            tracing::info!(name = %form.name, "contact submission delivered");
            Redirect::to("/contact/thanks").into_response()
        }
        Err(ContactError::Invalid(messages)) => {
            metrics::record_contact_submission("invalid");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "invalid_fields", "messages": messages })),
            )
                .into_response()
        }
        Err(ContactError::TurnstileFailed) => {
            metrics::record_contact_submission("turnstile_failed");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "turnstile_failed" })),
            )
                .into_response()
        }
        Err(ContactError::Misconfigured) => {
            metrics::record_contact_submission("misconfigured");
            tracing::error!("contact submission rejected: email credentials missing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "server_misconfigured" })),
            )
                .into_response()
        }
        Err(ContactError::Email(e)) => {
            metrics::record_contact_submission("email_failed");
            tracing::error!(error = %e, "contact email dispatch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "email_failed" })),
            )
                .into_response()
        }
    }
}
