//! `json-format` — validate a JSON document and re-emit it.
//!
//! Usage:
//!   json-format [pretty|compact|stable]
//!
//! The document is read from stdin. The default mode is `pretty`.

use devkit::cli::format_text;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("pretty");

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match format_text(&buf, mode) {
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
