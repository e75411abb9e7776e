//! Transactional email dispatch via the Resend HTTP API.

use serde::Serialize;
use thiserror::Error;

/// Errors while dispatching an email.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("email API returned status {0}")]
    Status(u16),
}

/// A plain-text outgoing email.
#[derive(Debug, Serialize)]
pub struct OutgoingEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
}

/// Send `email` through the Resend API rooted at `api_url`.
pub async fn send(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    email: &OutgoingEmail<'_>,
) -> Result<(), MailError> {
    let url = format!("{}/emails", api_url.trim_end_matches('/'));
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(email)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MailError::Status(status.as_u16()));
    }
    Ok(())
}
