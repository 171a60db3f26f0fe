//! `json-diff` — structural comparison of two JSON documents.
//!
//! Usage:
//!   json-diff <left.json> <right.json> [--json]
//!
//! Prints one line per change (`added` / `removed` / `changed`, with the
//! path), or the two classified trees as JSON when `--json` is given.

use devkit::cli::{diff_texts, diff_texts_json};
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (left_path, right_path) = match (args.get(1), args.get(2)) {
        (Some(l), Some(r)) => (l.clone(), r.clone()),
        _ => {
            eprintln!("Usage: json-diff <left.json> <right.json> [--json]");
            std::process::exit(1);
        }
    };
    let as_json = args.iter().any(|a| a == "--json");

    let left = read_file(&left_path);
    let right = read_file(&right_path);

    let result = if as_json {
        diff_texts_json(&left, &right)
    } else {
        diff_texts(&left, &right)
    };

    match result {
        Ok(out) => {
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}
