//! devkit — small developer utilities over JSON and URLs.
//!
//! Aggregates the workspace's engines behind text-level entry points and
//! three binaries:
//! - `json-diff`   — structural comparison of two documents
//! - `json-format` — validate and re-emit a document
//! - `url-parse`   — break a URL into scheme/host/path/query/fragment

pub mod cli;

pub use devkit_json_diff as json_diff;
pub use devkit_json_format as json_format;
pub use devkit_url as url;
