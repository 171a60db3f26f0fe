//! Input handling: both documents must parse before any comparison runs.

use serde_json::Value;
use thiserror::Error;

/// A parse failure on one side of the comparison. Carries the underlying
/// parser message (which names line and column) and identifies the side,
/// so the caller can point at the offending document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("left document: {0}")]
    Left(serde_json::Error),
    #[error("right document: {0}")]
    Right(serde_json::Error),
}

/// Parse the two documents independently.
///
/// A failure on the left suppresses the comparison outright; the right
/// side is not parsed speculatively and no partial diff is produced.
///
/// # Example
///
/// ```
/// use devkit_json_diff::parse_documents;
///
/// let err = parse_documents("{", "{}").unwrap_err();
/// assert!(err.to_string().starts_with("left document:"));
/// ```
pub fn parse_documents(left: &str, right: &str) -> Result<(Value, Value), ParseError> {
    let left = serde_json::from_str(left).map_err(ParseError::Left)?;
    let right = serde_json::from_str(right).map_err(ParseError::Right)?;
    Ok((left, right))
}
