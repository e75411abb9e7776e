//! Forbidden-word sanitization of feature text.
//!
//! Customer copy for clinic-adjacent businesses must not carry medical or
//! efficacy claims. This pass redacts feature titles/descriptions containing
//! a banned term, replacing the whole field with a fixed placeholder.
//!
//! Scope is deliberately narrow: only `service.features[*].title` and
//! `.description` are scanned; no other free-text field is touched. This is
//! best-effort content moderation, NOT a security boundary — it does not
//! defend against markup injection or obfuscated spellings.

use serde_json::Value;

/// Terms that may not appear in feature copy (case-sensitive substrings).
const BANNED_TERMS: [&str; 4] = ["治療", "改善", "効果", "医療"];

/// Replacement shown in place of redacted copy.
pub const PLACEHOLDER: &str = "（表現調整済み）";

/// True iff `text` contains any banned term as a substring.
pub fn contains_forbidden(text: &str) -> bool {
    BANNED_TERMS.iter().any(|term| text.contains(term))
}

/// Redact banned terms from `service.features[*]` in a merged, still-untyped
/// configuration value.
///
/// `title` and `description` are checked independently; a triggered field is
/// replaced wholesale with [`PLACEHOLDER`]. Values that do not have the
/// expected shape are left alone — the validator rejects them afterwards.
pub fn sanitize_features(merged: &mut Value) {
    let Some(features) = merged
        .get_mut("service")
        .and_then(|s| s.get_mut("features"))
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for feature in features {
        redact_field(feature, "title");
        redact_field(feature, "description");
    }
}

fn redact_field(feature: &mut Value, key: &str) {
    if let Some(text) = feature.get(key).and_then(Value::as_str) {
        if contains_forbidden(text) {
            feature[key] = Value::String(PLACEHOLDER.to_string());
        }
    }
}
