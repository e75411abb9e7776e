//! Deep merge of a customer override onto the default configuration.
//!
//! # Design Decisions
//! - Operates on untyped `serde_json::Value`; typing happens afterwards in
//!   `validation.rs` (never trust merged data directly)
//! - Objects merge recursively; scalars, arrays and null REPLACE wholesale.
//!   Arrays are never merged element-wise: a customer `service.menu` replaces
//!   the default menu entirely
//! - The base is never mutated

use serde_json::{Map, Value};

/// Overlay `overlay` onto `base`, returning a new value.
///
/// Keys present only in `base` are preserved; keys present only in `overlay`
/// are added. When both sides hold an object at a key the merge recurses;
/// any other pairing takes the overlay value as-is. A non-object overlay
/// leaves `base` untouched (an empty or scalar override is "no override").
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let Value::Object(overlay_map) = overlay else {
        return base.clone();
    };

    let mut out = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for (key, overlay_value) in overlay_map {
        let merged = match (out.get(key), overlay_value) {
            (Some(base_value @ Value::Object(_)), Value::Object(_)) => {
                deep_merge(base_value, overlay_value)
            }
            _ => overlay_value.clone(),
        };
        out.insert(key.clone(), merged);
    }

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_override_is_identity() {
        let base = json!({ "a": 1, "b": { "c": [1, 2] } });
        assert_eq!(deep_merge(&base, &json!({})), base);
    }

    #[test]
    fn test_base_keys_preserved() {
        let base = json!({ "a": 1, "b": 2 });
        let merged = deep_merge(&base, &json!({ "b": 3 }));
        assert_eq!(merged, json!({ "a": 1, "b": 3 }));
    }

    #[test]
    fn test_override_only_keys_added() {
        let base = json!({ "a": 1 });
        let merged = deep_merge(&base, &json!({ "x": { "y": 2 } }));
        assert_eq!(merged, json!({ "a": 1, "x": { "y": 2 } }));
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let base = json!({ "brand": { "name": "A", "area": "Tokyo" } });
        let merged = deep_merge(&base, &json!({ "brand": { "name": "B" } }));
        assert_eq!(merged, json!({ "brand": { "name": "B", "area": "Tokyo" } }));
    }

    #[test]
    fn test_arrays_replace_wholesale() {
        let base = json!({ "menu": [{ "name": "a" }, { "name": "b" }] });
        let merged = deep_merge(&base, &json!({ "menu": [{ "name": "c" }] }));
        assert_eq!(merged, json!({ "menu": [{ "name": "c" }] }));
    }

    #[test]
    fn test_null_replaces() {
        let base = json!({ "phone": "03-0000-0000" });
        let merged = deep_merge(&base, &json!({ "phone": null }));
        assert_eq!(merged, json!({ "phone": null }));
    }

    #[test]
    fn test_type_mismatch_replaces() {
        let base = json!({ "brand": { "name": "A" } });
        let merged = deep_merge(&base, &json!({ "brand": "flat" }));
        assert_eq!(merged, json!({ "brand": "flat" }));

        let base = json!({ "tags": ["a"] });
        let merged = deep_merge(&base, &json!({ "tags": { "k": 1 } }));
        assert_eq!(merged, json!({ "tags": { "k": 1 } }));
    }

    #[test]
    fn test_non_object_override_keeps_base() {
        let base = json!({ "a": 1 });
        assert_eq!(deep_merge(&base, &json!(null)), base);
        assert_eq!(deep_merge(&base, &json!([1, 2])), base);
        assert_eq!(deep_merge(&base, &json!("text")), base);
    }

    #[test]
    fn test_base_not_mutated() {
        let base = json!({ "a": { "b": 1 } });
        let snapshot = base.clone();
        let _ = deep_merge(&base, &json!({ "a": { "b": 2 } }));
        assert_eq!(base, snapshot);
    }
}
