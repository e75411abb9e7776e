//! Customer override loading.
//!
//! # Responsibilities
//! - Resolve the configured override source: unset, filesystem path, or
//!   HTTP(S) URL
//! - Fetch and JSON-parse the raw override
//!
//! # Design Decisions
//! - Every failure here is non-fatal by contract: the caller degrades to an
//!   empty override and logs a warning. Only the error *kind* is reported
//! - No retries at this layer; the cache TTL provides natural retry
//! - The HTTP client is shared and carries a bounded request timeout, so a
//!   stuck endpoint cannot stall a page render indefinitely

use reqwest::header::ACCEPT;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors while obtaining the raw override.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Override file unreadable.
    #[error("failed to read override file: {0}")]
    Load(#[from] std::io::Error),

    /// Override content is not valid JSON.
    #[error("failed to parse override JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Override endpoint unreachable or the transfer failed.
    #[error("failed to fetch override: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Override endpoint answered with a non-success status.
    #[error("override endpoint returned status {0}")]
    FetchStatus(u16),
}

/// Load the raw customer override from `source`.
///
/// An unset or empty source yields an empty object without any I/O. A source
/// starting with `http://` or `https://` (case-insensitive) is fetched with
/// `Accept: application/json`; anything else is treated as a filesystem path,
/// resolved relative to the working directory when not absolute.
pub async fn load_override(
    client: &reqwest::Client,
    source: Option<&str>,
) -> Result<Value, SourceError> {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return Ok(Value::Object(Map::new()));
    };

    if is_http_url(source) {
        read_json_from_http(client, source).await
    } else {
        read_json_from_file(source).await
    }
}

fn is_http_url(source: &str) -> bool {
    // Byte-wise so a multibyte character near the start cannot split a slice.
    let prefix_matches = |prefix: &str| {
        source.len() >= prefix.len()
            && source.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    };
    prefix_matches("http://") || prefix_matches("https://")
}

async fn read_json_from_file(path: &str) -> Result<Value, SourceError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn read_json_from_http(client: &reqwest::Client, url: &str) -> Result<Value, SourceError> {
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::FetchStatus(status.as_u16()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unset_source_yields_empty_object() {
        let client = reqwest::Client::new();
        assert_eq!(load_override(&client, None).await.unwrap(), json!({}));
        assert_eq!(load_override(&client, Some("")).await.unwrap(), json!({}));
    }

    #[test]
    fn test_url_detection() {
        assert!(is_http_url("http://example.com/site.json"));
        assert!(is_http_url("https://example.com/site.json"));
        assert!(is_http_url("HTTPS://EXAMPLE.COM/SITE.JSON"));
        assert!(!is_http_url("config/site.json"));
        assert!(!is_http_url("/etc/site.json"));
        assert!(!is_http_url("httpd.json"));
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error() {
        let client = reqwest::Client::new();
        let err = load_override(&client, Some("does/not/exist.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Load(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let path = std::env::temp_dir().join("site_override_bad.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let client = reqwest::Client::new();
        let err = load_override(&client, Some(path.to_str().unwrap()))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));

        tokio::fs::remove_file(&path).await.unwrap_or_default();
    }
}
