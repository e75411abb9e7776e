//! Site data validation.
//!
//! # Responsibilities
//! - Syntactic validation via serde (type mismatches, missing required fields)
//! - Semantic validation of the typed record (length bounds, URL shape,
//!   non-empty feature list)
//!
//! # Design Decisions
//! - Returns ALL violations, not just the first: each top-level section
//!   (brand, service, cta, analytics) is deserialized independently so one
//!   malformed section does not mask another, and semantic checks run on
//!   every section that did parse
//! - Validation is a pure function: Value → Result<SiteData, ValidationError>
//! - Runs after merge + sanitization, before data is accepted into the cache

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::sitedata::schema::{Analytics, Brand, Cta, Service, SiteData};

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// JSON-path-like location, e.g. `service.features[2].title`.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validation failure carrying every violated constraint.
#[derive(Debug, Error)]
#[error("site data validation failed: {}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a candidate structure into a fully-typed [`SiteData`].
///
/// Deterministic and side-effect-free: identical input yields an identical
/// record or an identical error set. Optional fields are defaulted by the
/// schema during deserialization.
pub fn validate(value: &Value) -> Result<SiteData, ValidationError> {
    let Value::Object(sections) = value else {
        return Err(ValidationError {
            errors: vec![FieldError {
                path: "$".to_string(),
                message: "must be a JSON object".to_string(),
            }],
        });
    };

    let mut errors = Vec::new();

    let brand: Option<Brand> = required_section(sections, "brand", &mut errors);
    let service: Option<Service> = required_section(sections, "service", &mut errors);
    let cta: Option<Cta> = defaulted_section(sections, "cta", &mut errors);
    let analytics: Option<Analytics> = defaulted_section(sections, "analytics", &mut errors);

    if let Some(brand) = &brand {
        check_brand(brand, &mut errors);
    }
    if let Some(service) = &service {
        check_service(service, &mut errors);
    }

    match (brand, service, cta, analytics) {
        (Some(brand), Some(service), Some(cta), Some(analytics)) if errors.is_empty() => {
            Ok(SiteData {
                brand,
                service,
                cta,
                analytics,
            })
        }
        _ => Err(ValidationError { errors }),
    }
}

/// Deserialize a section that must be present.
fn required_section<T: DeserializeOwned>(
    sections: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let Some(raw) = sections.get(key) else {
        errors.push(FieldError {
            path: key.to_string(),
            message: "is required".to_string(),
        });
        return None;
    };
    parse_section(raw, key, errors)
}

/// Deserialize a section that falls back to its default when absent.
fn defaulted_section<T: DeserializeOwned + Default>(
    sections: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match sections.get(key) {
        None => Some(T::default()),
        Some(raw) => parse_section(raw, key, errors),
    }
}

fn parse_section<T: DeserializeOwned>(
    raw: &Value,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match serde_json::from_value(raw.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(FieldError {
                path: key.to_string(),
                message: e.to_string(),
            });
            None
        }
    }
}

fn check_brand(brand: &Brand, errors: &mut Vec<FieldError>) {
    if brand.name.is_empty() {
        errors.push(FieldError {
            path: "brand.name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    check_url(errors, "brand.lineUrl", brand.line_url.as_deref());
    check_url(errors, "brand.instagramUrl", brand.instagram_url.as_deref());
}

fn check_service(service: &Service, errors: &mut Vec<FieldError>) {
    if service.features.is_empty() {
        errors.push(FieldError {
            path: "service.features".to_string(),
            message: "must contain at least one feature".to_string(),
        });
    }
    for (i, feature) in service.features.iter().enumerate() {
        check_length(
            errors,
            &format!("service.features[{i}].title"),
            &feature.title,
            1,
            100,
        );
        check_length(
            errors,
            &format!("service.features[{i}].description"),
            &feature.description,
            1,
            300,
        );
    }
}

fn check_length(errors: &mut Vec<FieldError>, path: &str, text: &str, min: usize, max: usize) {
    let len = text.chars().count();
    if len < min || len > max {
        errors.push(FieldError {
            path: path.to_string(),
            message: format!("length must be between {min} and {max} characters, got {len}"),
        });
    }
}

fn check_url(errors: &mut Vec<FieldError>, path: &str, value: Option<&str>) {
    if let Some(raw) = value {
        if Url::parse(raw).is_err() {
            errors.push(FieldError {
                path: path.to_string(),
                message: "must be a valid URL".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "brand": { "name": "サロン" },
            "service": { "features": [{ "title": "t", "description": "d" }] }
        })
    }

    #[test]
    fn test_minimal_config_validates() {
        let data = validate(&minimal()).unwrap();
        assert_eq!(data.brand.name, "サロン");
        assert_eq!(data.cta.primary_url, "/contact");
    }

    #[test]
    fn test_empty_features_rejected() {
        let mut value = minimal();
        value["service"]["features"] = json!([]);
        let err = validate(&value).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].path, "service.features");
    }

    #[test]
    fn test_missing_required_section_reported() {
        let value = json!({
            "service": { "features": [{ "title": "t", "description": "d" }] }
        });
        let err = validate(&value).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].path, "brand");
        assert!(err.errors[0].message.contains("required"));
    }

    #[test]
    fn test_multiple_shape_violations_all_reported() {
        // Missing brand AND mistyped features: both must surface.
        let value = json!({ "service": { "features": 42 } });
        let err = validate(&value).unwrap_err();

        let paths: Vec<&str> = err.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["brand", "service"]);
        assert!(err.errors[1].message.contains("invalid type"));
    }

    #[test]
    fn test_shape_and_semantic_violations_combined() {
        // cta is mistyped (shape), brand.name is empty (semantic).
        let mut value = minimal();
        value["brand"]["name"] = json!("");
        value["cta"] = json!("banner");

        let err = validate(&value).unwrap_err();
        let paths: Vec<&str> = err.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["cta", "brand.name"]);
    }

    #[test]
    fn test_non_object_input_rejected() {
        let err = validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.errors[0].path, "$");
    }

    #[test]
    fn test_all_semantic_violations_collected() {
        let mut value = minimal();
        value["brand"]["name"] = json!("");
        value["brand"]["lineUrl"] = json!("not a url");
        value["service"]["features"] = json!([
            { "title": "", "description": "d" },
            { "title": "ok", "description": "x".repeat(301) }
        ]);

        let err = validate(&value).unwrap_err();
        let paths: Vec<&str> = err.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "brand.name",
                "brand.lineUrl",
                "service.features[0].title",
                "service.features[1].description",
            ]
        );
    }

    #[test]
    fn test_length_bounds_count_chars_not_bytes() {
        let mut value = minimal();
        // 100 Japanese characters: within bounds even though > 100 bytes.
        value["service"]["features"][0]["title"] = json!("あ".repeat(100));
        assert!(validate(&value).is_ok());

        value["service"]["features"][0]["title"] = json!("あ".repeat(101));
        assert!(validate(&value).is_err());
    }

    #[test]
    fn test_deterministic_error_set() {
        let mut value = minimal();
        value["brand"]["name"] = json!("");
        let a = validate(&value).unwrap_err();
        let b = validate(&value).unwrap_err();
        assert_eq!(a.errors, b.errors);
    }
}
