//! Structural JSON diff.
//!
//! Compares two parsed JSON documents and answers, for any path, whether
//! the two sides differ — and produces one classified tree per side for
//! side-by-side display. Arrays are compared positionally, objects over
//! the union of their keys; object insertion order is preserved for
//! display and ignored for comparison.
//!
//! # Example
//!
//! ```
//! use devkit_json_diff::{classify, differs, Comparison, DiffTag, Side};
//! use serde_json::json;
//!
//! let left = json!({"name": "Product", "price": 99.99});
//! let right = json!({"name": "Product", "price": 89.99});
//!
//! assert!(differs(&left, &right, &["price".to_string()]));
//! assert!(!differs(&left, &right, &["name".to_string()]));
//!
//! let cmp = Comparison::new(left, right);
//! let tree = classify(&cmp, Side::Right);
//! assert_eq!(tree.tag, DiffTag::Changed);
//! ```

pub mod classify;
pub mod diff;
pub mod error;
pub mod path;

pub use classify::{classify, ClassifiedNode, ClassifiedValue, DiffTag, Side};
pub use diff::{differs, Comparison};
pub use error::{parse_documents, ParseError};
pub use path::{child, format_path, parse_path, resolve, Path, PathStep};
