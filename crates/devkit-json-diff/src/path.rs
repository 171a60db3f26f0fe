//! Path addressing into JSON documents.
//!
//! A [`Path`] is an ordered sequence of string segments locating a node
//! inside a [`Value`]. Over an array, a segment is read as a base-10 index;
//! over an object it is a key. The empty path addresses the root.

use serde_json::Value;

/// A single step in a path: an object key or the decimal form of an array
/// index.
pub type PathStep = String;

/// A location inside a JSON document. Empty = root.
pub type Path = Vec<PathStep>;

/// Resolve `path` against `root`, descending one segment at a time.
///
/// Returns `None` as soon as the current value cannot be descended into —
/// a primitive or `null` reached before the path is exhausted, an absent
/// object key, an out-of-range or malformed array index. Resolution never
/// fails with an error; every dead end collapses to `None`.
///
/// # Example
///
/// ```
/// use devkit_json_diff::resolve;
/// use serde_json::json;
///
/// let doc = json!({"items": [{"id": 7}]});
/// let path = vec!["items".to_string(), "0".to_string(), "id".to_string()];
/// assert_eq!(resolve(&doc, &path), Some(&json!(7)));
///
/// let missing = vec!["items".to_string(), "3".to_string()];
/// assert_eq!(resolve(&doc, &missing), None);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = root;
    for step in path {
        match current {
            Value::Array(arr) => {
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(step.as_str())?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Format a path in its display form: `/a/0/b`. The root path formats as
/// the empty string.
///
/// # Example
///
/// ```
/// use devkit_json_diff::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["a".to_string(), "0".to_string()]), "/a/0");
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(step);
    }
    out
}

/// Parse the display form produced by [`format_path`] back into a path.
///
/// The empty string parses to the root path; a leading `/` is optional.
pub fn parse_path(s: &str) -> Path {
    let s = s.strip_prefix('/').unwrap_or(s);
    if s.is_empty() {
        return Vec::new();
    }
    s.split('/').map(str::to_string).collect()
}

/// Extend `path` with one more step, returning the child path.
pub fn child(path: &[PathStep], step: impl Into<PathStep>) -> Path {
    let mut out = path.to_vec();
    out.push(step.into());
    out
}
