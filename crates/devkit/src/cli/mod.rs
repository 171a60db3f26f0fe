//! Text-level entry points behind the binaries.
//!
//! Each function takes raw text in and produces printable text out, so the
//! binaries stay thin: argument handling and I/O there, everything else
//! here.

use std::collections::BTreeMap;

use devkit_json_diff::{
    classify, format_path, parse_documents, ClassifiedNode, ClassifiedValue, Comparison,
    DiffTag, ParseError, Side,
};
use devkit_json_format::{format_compact, format_pretty, format_stable, FormatError};
use devkit_url::{UrlError, UrlParts};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Diff(ParseError),
    Format(FormatError),
    Url(UrlError),
    Json(serde_json::Error),
    UnknownMode(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Diff(e) => write!(f, "{e}"),
            CliError::Format(e) => write!(f, "{e}"),
            CliError::Url(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "{e}"),
            CliError::UnknownMode(m) => write!(f, "Unknown mode: {m}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Diff(e)
    }
}

impl From<FormatError> for CliError {
    fn from(e: FormatError) -> Self {
        CliError::Format(e)
    }
}

impl From<UrlError> for CliError {
    fn from(e: UrlError) -> Self {
        CliError::Url(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

// ── json-diff ─────────────────────────────────────────────────────────────

/// Compare two documents and list every change, one per line, sorted by
/// path: `removed` entries come from the left tree, `added` and `changed`
/// from the right.
pub fn diff_texts(left: &str, right: &str) -> Result<String, CliError> {
    let (left, right) = parse_documents(left, right)?;
    let cmp = Comparison::new(left, right);
    let left_tree = classify(&cmp, Side::Left);
    let right_tree = classify(&cmp, Side::Right);

    let mut entries: BTreeMap<String, &'static str> = BTreeMap::new();
    collect_right(&right_tree, &mut entries);
    collect_left(&left_tree, &mut entries);

    if entries.is_empty() {
        return Ok("documents are identical".to_string());
    }
    let lines: Vec<String> = entries
        .into_iter()
        .map(|(path, tag)| {
            let shown = if path.is_empty() { "/" } else { path.as_str() };
            format!("{tag:<8} {shown}")
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Compare two documents and return both classified trees as JSON, for
/// consumers that render the two panes themselves.
pub fn diff_texts_json(left: &str, right: &str) -> Result<String, CliError> {
    let (left, right) = parse_documents(left, right)?;
    let cmp = Comparison::new(left, right);
    let out = serde_json::json!({
        "left": classify(&cmp, Side::Left),
        "right": classify(&cmp, Side::Right),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Material only the right side has, plus changed leaves.
fn collect_right(node: &ClassifiedNode, entries: &mut BTreeMap<String, &'static str>) {
    match node.tag {
        DiffTag::Added => {
            // Whole subtree is new; one entry for its top is enough.
            entries.insert(format_path(&node.path), "added");
            return;
        }
        DiffTag::Changed => {
            if matches!(node.value, ClassifiedValue::Primitive(_)) {
                entries.insert(format_path(&node.path), "changed");
            }
        }
        DiffTag::Identical | DiffTag::Removed => {}
    }
    for child in children(node) {
        collect_right(child, entries);
    }
}

/// Material only the left side has; changed leaves the right walk could
/// not see (type mismatches) fill in without overwriting.
fn collect_left(node: &ClassifiedNode, entries: &mut BTreeMap<String, &'static str>) {
    match node.tag {
        DiffTag::Removed => {
            entries.insert(format_path(&node.path), "removed");
            return;
        }
        DiffTag::Changed => {
            if matches!(node.value, ClassifiedValue::Primitive(_)) {
                entries.entry(format_path(&node.path)).or_insert("changed");
            }
        }
        DiffTag::Identical | DiffTag::Added => {}
    }
    for child in children(node) {
        collect_left(child, entries);
    }
}

fn children(node: &ClassifiedNode) -> Vec<&ClassifiedNode> {
    match &node.value {
        ClassifiedValue::Primitive(_) => Vec::new(),
        ClassifiedValue::Array(items) => items.iter().collect(),
        ClassifiedValue::Object(pairs) => pairs.iter().map(|(_, n)| n).collect(),
    }
}

// ── json-format ───────────────────────────────────────────────────────────

/// Format a document in the requested mode: `pretty`, `compact`, or
/// `stable`.
pub fn format_text(input: &str, mode: &str) -> Result<String, CliError> {
    match mode.to_lowercase().as_str() {
        "pretty" => Ok(format_pretty(input)?),
        "compact" => Ok(format_compact(input)?),
        "stable" => Ok(format_stable(input)?),
        other => Err(CliError::UnknownMode(other.to_string())),
    }
}

// ── url-parse ─────────────────────────────────────────────────────────────

/// Break a URL down into a labeled listing.
pub fn parse_url_text(input: &str) -> Result<String, CliError> {
    let parts = UrlParts::parse(input)?;
    let mut out = String::new();
    out.push_str(&format!("scheme    {}\n", parts.scheme));
    out.push_str(&format!("host      {}\n", parts.host));
    for (i, segment) in parts.segments.iter().enumerate() {
        out.push_str(&format!("path[{i}]   {segment}\n"));
    }
    for (i, (key, value)) in parts.query.iter().enumerate() {
        out.push_str(&format!("query[{i}]  {key} = {value}\n"));
    }
    if let Some(fragment) = &parts.fragment {
        out.push_str(&format!("fragment  {fragment}\n"));
    }
    Ok(out.trim_end().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────
