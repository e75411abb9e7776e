//! Contact form submission.
//!
//! # Data Flow
//! ```text
//! form post (name, email, message, token)
//!     → field validation (forms.rs validators)
//!     → turnstile.rs (anti-automation verification)
//!     → mailer.rs (email dispatch to the site owner)
//!     → redirect to /contact/thanks
//! ```
//!
//! # Design Decisions
//! - Failed verification and missing credentials are distinct, user-visible
//!   failure states (`turnstile_failed`, `server_misconfigured`), never
//!   swallowed
//! - No retries: a failed submission is reported, the visitor resubmits

pub mod mailer;
pub mod turnstile;

use serde::Deserialize;
use thiserror::Error;

use crate::forms;
use crate::settings::Settings;
use self::mailer::{MailError, OutgoingEmail};

/// An incoming contact-form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Turnstile widget token.
    #[serde(default)]
    pub token: String,
}

/// Submission failure states.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Field validation failed; one message per invalid field.
    #[error("invalid submission: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// Anti-automation check failed (or its own network call did).
    #[error("turnstile_failed")]
    TurnstileFailed,

    /// Email credentials or destination address absent.
    #[error("server_misconfigured")]
    Misconfigured,

    /// Email dispatch failed.
    #[error("failed to send contact email: {0}")]
    Email(#[from] MailError),
}

/// Validate submission fields. Returns one message per violation.
pub fn validate_form(form: &ContactForm) -> Vec<String> {
    let checks = [
        forms::required("Name")(&form.name),
        forms::max_length(100, "Name")(&form.name),
        forms::email()(&form.email),
        forms::required("Message")(&form.message),
        forms::max_length(2000, "Message")(&form.message),
    ];
    checks.into_iter().flatten().collect()
}

/// Run a submission end to end: validate, verify, dispatch.
pub async fn submit(
    client: &reqwest::Client,
    settings: &Settings,
    form: &ContactForm,
) -> Result<(), ContactError> {
    let errors = validate_form(form);
    if !errors.is_empty() {
        return Err(ContactError::Invalid(errors));
    }

    let verified = turnstile::verify(
        client,
        &settings.turnstile_verify_url,
        settings.turnstile_secret_key.as_deref(),
        &form.token,
    )
    .await;
    if !verified {
        return Err(ContactError::TurnstileFailed);
    }

    let (Some(api_key), Some(to)) = (
        settings.resend_api_key.as_deref(),
        settings.contact_to_email.as_deref(),
    ) else {
        return Err(ContactError::Misconfigured);
    };

    let subject = format!("[Contact] {}", form.name);
    let text = format!("{} <{}>\n\n{}", form.name, form.email, form.message);
    let email = OutgoingEmail {
        from: &settings.contact_from_email,
        to,
        subject: &subject,
        text: &text,
    };

    mailer::send(client, &settings.resend_api_url, api_key, &email).await?;
    Ok(())
}
