//! Difference predicate and per-comparison index.
//!
//! [`differs`] answers "do the two documents disagree at this path?" for a
//! single query. [`Comparison`] snapshots both roots and computes every
//! path's flag in one bottom-up pass, so repeated queries (one per rendered
//! node) are map lookups instead of fresh traversals.
//!
//! An explicit JSON `null` and an absent key/index are the same "missing"
//! state as far as the predicate is concerned; `null` vs `null` never
//! differs, `null` vs anything else always does.

use std::collections::HashMap;

use indexmap::IndexSet;
use serde_json::Value;

use crate::path::{resolve, Path, PathStep};

// ── Predicate ─────────────────────────────────────────────────────────────

/// Decide whether `left` and `right` disagree at `path`.
///
/// Rules, applied to the values the two sides resolve to at `path`:
/// - both missing (or `null`): no difference
/// - exactly one side missing, or a JSON type mismatch: difference
/// - both arrays: different lengths differ, else compare index by index
/// - both objects: compare over the union of keys
/// - both primitives of one type: strict value inequality
///
/// The predicate is symmetric: `differs(l, r, p) == differs(r, l, p)`.
///
/// # Example
///
/// ```
/// use devkit_json_diff::differs;
/// use serde_json::json;
///
/// let left = json!({"a": 1});
/// let right = json!({"a": 2});
/// assert!(differs(&left, &right, &["a".to_string()]));
/// assert!(!differs(&left, &left, &[]));
/// ```
pub fn differs(left: &Value, right: &Value, path: &[PathStep]) -> bool {
    pair_differs(resolve(left, path), resolve(right, path))
}

fn present(v: Option<&Value>) -> Option<&Value> {
    v.filter(|v| !v.is_null())
}

fn pair_differs(l: Option<&Value>, r: Option<&Value>) -> bool {
    match (present(l), present(r)) {
        (None, None) => false,
        (Some(Value::Array(a)), Some(Value::Array(b))) => {
            a.len() != b.len()
                || (0..a.len()).any(|i| pair_differs(a.get(i), b.get(i)))
        }
        (Some(Value::Object(a)), Some(Value::Object(b))) => {
            key_union(a, b)
                .into_iter()
                .any(|k| pair_differs(a.get(k), b.get(k)))
        }
        (Some(a), Some(b)) => scalar_differs(a, b),
        _ => true,
    }
}

/// Primitive comparison; a type mismatch (including container vs primitive)
/// always differs.
fn scalar_differs(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x != y,
        (Value::Number(x), Value::Number(y)) => x != y,
        (Value::Bool(x), Value::Bool(y)) => x != y,
        _ => true,
    }
}

/// Union of keys, left side's order first, then keys only the right has.
fn key_union<'a>(
    a: &'a serde_json::Map<String, Value>,
    b: &'a serde_json::Map<String, Value>,
) -> IndexSet<&'a str> {
    let mut keys: IndexSet<&str> = a.keys().map(String::as_str).collect();
    keys.extend(b.keys().map(String::as_str));
    keys
}

// ── Comparison session ────────────────────────────────────────────────────

/// A single comparison of two documents.
///
/// Construction takes an immutable snapshot of both roots and walks them
/// once, bottom-up, recording a difference flag for every path present on
/// either side. [`Comparison::differs_at`] then answers in O(1); paths the
/// pass never visited (descents into primitives, paths on neither side)
/// fall back to direct resolution and agree with [`differs`] in all cases.
#[derive(Debug, Clone)]
pub struct Comparison {
    left: Value,
    right: Value,
    flags: HashMap<Path, bool>,
}

impl Comparison {
    /// Snapshot `left` and `right` and index every path's difference flag.
    pub fn new(left: Value, right: Value) -> Self {
        let mut flags = HashMap::new();
        let mut scratch: Path = Vec::new();
        index_pair(&mut flags, &mut scratch, Some(&left), Some(&right));
        Comparison { left, right, flags }
    }

    /// The left root as snapshotted at construction.
    pub fn left(&self) -> &Value {
        &self.left
    }

    /// The right root as snapshotted at construction.
    pub fn right(&self) -> &Value {
        &self.right
    }

    /// Whether the two documents disagree at `path`.
    pub fn differs_at(&self, path: &[PathStep]) -> bool {
        match self.flags.get(path) {
            Some(&flag) => flag,
            None => pair_differs(resolve(&self.left, path), resolve(&self.right, path)),
        }
    }

    /// Every indexed path whose flag is set, sorted for stable output.
    ///
    /// Includes interior paths: if `/a/b` differs, `/a` and the root are
    /// reported as well.
    pub fn changed_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self
            .flags
            .iter()
            .filter_map(|(path, &flag)| flag.then_some(path))
            .collect();
        paths.sort();
        paths
    }
}

/// Bottom-up indexing walk. Computes the flag for the pair at `path` from
/// the flags of its children, recording it on the way out. Children are
/// always visited (no short-circuit) so the index covers the whole union
/// tree.
fn index_pair(
    flags: &mut HashMap<Path, bool>,
    path: &mut Path,
    l: Option<&Value>,
    r: Option<&Value>,
) -> bool {
    let flag = match (present(l), present(r)) {
        (None, None) => false,
        (Some(Value::Array(a)), Some(Value::Array(b))) => {
            let mut any = a.len() != b.len();
            for i in 0..a.len().max(b.len()) {
                path.push(i.to_string());
                let changed = index_pair(flags, path, a.get(i), b.get(i));
                path.pop();
                any |= changed;
            }
            any
        }
        (Some(Value::Object(a)), Some(Value::Object(b))) => {
            let mut any = false;
            for key in key_union(a, b) {
                path.push(key.to_string());
                let changed = index_pair(flags, path, a.get(key), b.get(key));
                path.pop();
                any |= changed;
            }
            any
        }
        (Some(a), Some(b)) => scalar_differs(a, b),
        _ => true,
    };
    flags.insert(path.clone(), flag);
    flag
}
