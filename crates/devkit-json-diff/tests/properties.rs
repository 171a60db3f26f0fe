//! Algebraic properties of the predicate and the classifier, checked over
//! generated documents.

use devkit_json_diff::{classify, differs, Comparison, Side};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| Value::from(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-d]{1,2}", inner), 0..4).prop_map(|entries| {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Paths worth probing for a pair of documents: the root plus every
/// immediate child step found on either side.
fn probe_paths(left: &Value, right: &Value) -> Vec<Vec<String>> {
    let mut paths = vec![Vec::new()];
    for doc in [left, right] {
        match doc {
            Value::Array(arr) => {
                paths.extend((0..arr.len()).map(|i| vec![i.to_string()]));
            }
            Value::Object(map) => {
                paths.extend(map.keys().map(|k| vec![k.clone()]));
            }
            _ => {}
        }
    }
    paths
}

proptest! {
    #[test]
    fn reflexive(doc in arb_json()) {
        for path in probe_paths(&doc, &doc) {
            prop_assert!(!differs(&doc, &doc, &path));
        }
    }

    #[test]
    fn symmetric(left in arb_json(), right in arb_json()) {
        for path in probe_paths(&left, &right) {
            prop_assert_eq!(
                differs(&left, &right, &path),
                differs(&right, &left, &path)
            );
        }
    }

    #[test]
    fn index_agrees_with_predicate(left in arb_json(), right in arb_json()) {
        let cmp = Comparison::new(left.clone(), right.clone());
        for path in probe_paths(&left, &right) {
            prop_assert_eq!(cmp.differs_at(&path), differs(&left, &right, &path));
        }
    }

    #[test]
    fn classification_is_pure(left in arb_json(), right in arb_json()) {
        let cmp = Comparison::new(left.clone(), right.clone());
        let once = classify(&cmp, Side::Left);
        let twice = classify(&cmp, Side::Left);
        prop_assert_eq!(once, twice);
        // The snapshots are untouched by classification.
        prop_assert_eq!(cmp.left(), &left);
        prop_assert_eq!(cmp.right(), &right);
    }

    #[test]
    fn equal_documents_never_differ_at_root(doc in arb_json()) {
        prop_assert!(!differs(&doc, &doc.clone(), &[]));
    }
}
