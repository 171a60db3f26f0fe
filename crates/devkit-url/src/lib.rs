//! URL breakdown and reconstruction.
//!
//! Splits a URL into an editable model — scheme, host, path segments,
//! query rows, fragment — and rebuilds the URL string from it. Query rows
//! are an ordered list of key/value pairs: duplicate keys are legal and
//! keep their positions, and every editing operation is index-addressed
//! the way a row-based editor works.
//!
//! # Example
//!
//! ```
//! use devkit_url::UrlParts;
//!
//! let mut parts = UrlParts::parse("https://example.com/a/b?x=1#top").unwrap();
//! assert_eq!(parts.segments, vec!["a", "b"]);
//!
//! parts.push_segment("c");
//! parts.push_param("y", "2");
//! assert_eq!(parts.build().unwrap(), "https://example.com/a/b/c?x=1&y=2#top");
//! ```

use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("{0}")]
    Parse(#[from] url::ParseError),
    #[error("URL is not hierarchical")]
    NotHierarchical,
    #[error("no such path segment: {0}")]
    SegmentOutOfRange(usize),
    #[error("no such query parameter: {0}")]
    ParamOutOfRange(usize),
}

/// An editable breakdown of one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    /// Scheme without the trailing `:`.
    pub scheme: String,
    /// Host, with `:port` appended when a port is present.
    pub host: String,
    /// Path split on `/`, empty segments discarded.
    pub segments: Vec<String>,
    /// Query rows in document order; duplicate keys allowed.
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`; `None` when absent or empty.
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Parse `input` into its parts.
    ///
    /// A legacy hashbang marker (`/#!`) is stripped before parsing, so
    /// old-style client-routed URLs break down like their modern forms.
    /// Non-hierarchical URLs (`mailto:`, `data:`, …) are rejected.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        let cleaned = input.replace("/#!", "/");
        let url = Url::parse(&cleaned)?;
        if url.cannot_be_a_base() {
            return Err(UrlError::NotHierarchical);
        }

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        let segments = url
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let fragment = url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(str::to_string);

        Ok(UrlParts {
            scheme: url.scheme().to_string(),
            host,
            segments,
            query,
            fragment,
        })
    }

    // ── Path segment rows ─────────────────────────────────────────────────

    pub fn push_segment(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn set_segment(&mut self, index: usize, segment: impl Into<String>) -> Result<(), UrlError> {
        match self.segments.get_mut(index) {
            Some(slot) => {
                *slot = segment.into();
                Ok(())
            }
            None => Err(UrlError::SegmentOutOfRange(index)),
        }
    }

    pub fn remove_segment(&mut self, index: usize) -> Result<String, UrlError> {
        if index >= self.segments.len() {
            return Err(UrlError::SegmentOutOfRange(index));
        }
        Ok(self.segments.remove(index))
    }

    // ── Query rows ────────────────────────────────────────────────────────

    pub fn push_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    pub fn set_param(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), UrlError> {
        match self.query.get_mut(index) {
            Some(slot) => {
                *slot = (key.into(), value.into());
                Ok(())
            }
            None => Err(UrlError::ParamOutOfRange(index)),
        }
    }

    pub fn remove_param(&mut self, index: usize) -> Result<(String, String), UrlError> {
        if index >= self.query.len() {
            return Err(UrlError::ParamOutOfRange(index));
        }
        Ok(self.query.remove(index))
    }

    // ── Reconstruction ────────────────────────────────────────────────────

    /// Rebuild the URL string: scheme and host, `/`-joined segments, query
    /// rows in order, fragment last. Rows with an empty key are skipped,
    /// so a half-filled editor row never emits a dangling `=value`.
    pub fn build(&self) -> Result<String, UrlError> {
        let mut url = Url::parse(&format!("{}://{}/", self.scheme, self.host))?;
        if !self.segments.is_empty() {
            url.set_path(&self.segments.join("/"));
        }
        if self.query.iter().any(|(k, _)| !k.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                if !key.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        if let Some(fragment) = &self.fragment {
            url.set_fragment(Some(fragment));
        }
        Ok(url.to_string())
    }
}
