//! Cloudflare Turnstile verification.
//!
//! The widget token submitted with the form is checked server-side against
//! the siteverify endpoint. Any failure along the way (missing secret, empty
//! token, network error, malformed body) counts as "not verified" — the
//! submission must not go through on a doubt.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
}

/// Verify a Turnstile token. Returns `false` on any failure.
pub async fn verify(
    client: &reqwest::Client,
    verify_url: &str,
    secret: Option<&str>,
    token: &str,
) -> bool {
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        return false;
    };
    if token.is_empty() {
        return false;
    }

    let result = client
        .post(verify_url)
        .form(&[("secret", secret), ("response", token)])
        .send()
        .await;

    match result {
        Ok(response) => match response.json::<VerifyResponse>().await {
            Ok(body) => body.success,
            Err(e) => {
                tracing::warn!(error = %e, "turnstile verification returned malformed body");
                false
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "turnstile verification request failed");
            false
        }
    }
}
