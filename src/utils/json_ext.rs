//! JSON path-flattening utilities for nested declaration expansion.
//!
//! Variable nodes carrying structured values expose every nested key as a
//! dotted path (`cfg`, `cfg.retries`, `cfg.retries.max`). The helpers here
//! enumerate those paths without ever failing: malformed input simply
//! produces no paths.

use serde_json::Value;

/// Interprets a node attribute as structured data, if possible.
///
/// String payloads are parsed as JSON; objects and arrays are used as-is.
/// Anything else (numbers, booleans, null, unparseable strings) yields
/// `None`; the caller treats that as "no children", never as an error.
///
/// # Examples
///
/// ```rust
/// use flowcanvas::utils::json_ext::parse_structured;
/// use serde_json::json;
///
/// assert!(parse_structured(&json!(r#"{"a": 1}"#)).is_some());
/// assert!(parse_structured(&json!({"a": 1})).is_some());
/// assert!(parse_structured(&json!("not json {")).is_none());
/// assert!(parse_structured(&json!(42)).is_none());
/// ```
#[must_use]
pub fn parse_structured(value: &Value) -> Option<Value> {
    match value {
        Value::String(raw) => serde_json::from_str::<Value>(raw)
            .ok()
            .filter(|v| v.is_object() || v.is_array()),
        Value::Object(_) | Value::Array(_) => Some(value.clone()),
        _ => None,
    }
}

/// Enumerates every nested key of `value` as a dotted path under `prefix`.
///
/// Objects contribute their keys, arrays their indices, recursively and
/// depth-unbounded. Intermediate containers are emitted alongside their
/// leaves. Primitives contribute nothing.
///
/// # Examples
///
/// ```rust
/// use flowcanvas::utils::json_ext::flatten_paths;
/// use serde_json::json;
///
/// let value = json!({"a": {"b": 1}, "list": [10]});
/// let paths = flatten_paths(&value, "cfg");
/// assert_eq!(paths, vec!["cfg.a", "cfg.a.b", "cfg.list", "cfg.list.0"]);
/// ```
#[must_use]
pub fn flatten_paths(value: &Value, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(value, prefix, &mut paths);
    paths
}

fn collect_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = join_path(prefix, key);
                out.push(path.clone());
                collect_paths(child, &path, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let path = join_path(prefix, &index.to_string());
                out.push(path.clone());
                collect_paths(child, &path, out);
            }
        }
        _ => {}
    }
}

/// Joins two path segments with a dot, tolerating an empty prefix.
#[must_use]
pub fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
