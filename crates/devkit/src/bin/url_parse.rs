//! `url-parse` — break a URL into its parts.
//!
//! Usage:
//!   url-parse '<url>'

use devkit::cli::parse_url_text;
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let input = match args.get(1) {
        Some(url) => url.clone(),
        None => {
            eprintln!("First argument must be a URL.");
            std::process::exit(1);
        }
    };

    match parse_url_text(&input) {
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
