//! Wallaby tokenizer CLI
//!
//! A headless front end for testing and debugging: tokenizes an HTML file
//! and prints the token stream.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use wallaby_html::HTMLTokenizer;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let html = if args.get(1).is_some_and(|arg| arg == "--html") {
        match args.get(2) {
            Some(inline) => inline.clone(),
            None => {
                eprintln!("Usage: wallaby-cli [file.html]");
                eprintln!("       wallaby-cli --html '<html>...</html>'");
                std::process::exit(1);
            }
        }
    } else {
        let path = args.get(1).map_or("./simple.html", String::as_str);
        fs::read_to_string(path).with_context(|| format!("failed to open {path}"))?
    };

    let mut tokenizer = HTMLTokenizer::new(&html);

    println!("=== Tokens ===");
    while let Some(token) = tokenizer.next_token() {
        println!("{token}");
    }

    let errors = tokenizer.parse_errors();
    println!();
    println!("=== Parse Errors ===");
    if errors.is_empty() {
        println!("none");
    } else {
        for record in errors {
            println!("{} at position {}", record.error, record.position);
        }
    }

    Ok(())
}
