//! Side-by-side classification: one renderable tree per side.
//!
//! [`classify`] walks one side's document and labels every node with a
//! [`DiffTag`], using the other side only through the [`Comparison`] index
//! and key/index presence checks. The result is plain data; mapping tags to
//! visuals is the consumer's concern.

use serde::Serialize;
use serde_json::Value;

use crate::diff::Comparison;
use crate::path::{resolve, Path};

/// Which document a classified tree was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The tag for a node the other side does not have: material only on
    /// the left reads as removed, only on the right as added.
    fn absent_tag(self) -> DiffTag {
        match self {
            Side::Left => DiffTag::Removed,
            Side::Right => DiffTag::Added,
        }
    }
}

/// Per-node difference classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Identical,
    Added,
    Removed,
    Changed,
}

/// A node of the classified tree: where it is, how it compares, and what
/// it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedNode {
    pub path: Path,
    pub tag: DiffTag,
    pub value: ClassifiedValue,
}

/// The payload of a classified node. Object entries keep this side's own
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifiedValue {
    Primitive(Value),
    Array(Vec<ClassifiedNode>),
    Object(Vec<(String, ClassifiedNode)>),
}

/// Build the classified tree for one side of `cmp`.
///
/// Tagging rules:
/// - a node whose key/index the other side lacks (or an ancestor of which
///   it lacks) is [`DiffTag::Removed`] on the left, [`DiffTag::Added`] on
///   the right, and the whole subtree inherits that tag;
/// - a node present on both sides is [`DiffTag::Changed`] if anything
///   under its path differs, else [`DiffTag::Identical`].
///
/// Classification is pure: the same comparison always yields structurally
/// identical trees, and the input documents are never mutated.
///
/// # Example
///
/// ```
/// use devkit_json_diff::{classify, Comparison, DiffTag, Side};
/// use serde_json::json;
///
/// let cmp = Comparison::new(json!({"a": 1}), json!({"b": 1}));
/// let left = classify(&cmp, Side::Left);
/// let right = classify(&cmp, Side::Right);
/// assert_eq!(left.tag, DiffTag::Changed);
/// assert_eq!(child_tag(&left), DiffTag::Removed);
/// assert_eq!(child_tag(&right), DiffTag::Added);
///
/// fn child_tag(node: &devkit_json_diff::ClassifiedNode) -> DiffTag {
///     match &node.value {
///         devkit_json_diff::ClassifiedValue::Object(entries) => entries[0].1.tag,
///         _ => unreachable!(),
///     }
/// }
/// ```
pub fn classify(cmp: &Comparison, side: Side) -> ClassifiedNode {
    let (own, other) = match side {
        Side::Left => (cmp.left(), cmp.right()),
        Side::Right => (cmp.right(), cmp.left()),
    };
    let mut path: Path = Vec::new();
    walk(cmp, own, other, &mut path, side, false)
}

fn walk(
    cmp: &Comparison,
    value: &Value,
    other_root: &Value,
    path: &mut Path,
    side: Side,
    absent: bool,
) -> ClassifiedNode {
    let tag = if absent {
        side.absent_tag()
    } else if cmp.differs_at(path) {
        DiffTag::Changed
    } else {
        DiffTag::Identical
    };

    let value = match value {
        Value::Array(arr) => {
            // Index presence is judged against the other side's length at
            // this path; a non-array there counts as length zero.
            let other_len = if absent {
                0
            } else {
                match resolve(other_root, path) {
                    Some(Value::Array(other)) => other.len(),
                    _ => 0,
                }
            };
            let mut children = Vec::with_capacity(arr.len());
            for (i, item) in arr.iter().enumerate() {
                path.push(i.to_string());
                let child_absent = absent || i >= other_len;
                children.push(walk(cmp, item, other_root, path, side, child_absent));
                path.pop();
            }
            ClassifiedValue::Array(children)
        }
        Value::Object(map) => {
            let other_obj = if absent {
                None
            } else {
                match resolve(other_root, path) {
                    Some(Value::Object(other)) => Some(other),
                    _ => None,
                }
            };
            let mut children = Vec::with_capacity(map.len());
            for (key, item) in map {
                path.push(key.clone());
                let child_absent = absent
                    || !other_obj.is_some_and(|other| other.contains_key(key));
                let node = walk(cmp, item, other_root, path, side, child_absent);
                path.pop();
                children.push((key.clone(), node));
            }
            ClassifiedValue::Object(children)
        }
        primitive => ClassifiedValue::Primitive(primitive.clone()),
    };

    ClassifiedNode {
        path: path.clone(),
        tag,
        value,
    }
}
