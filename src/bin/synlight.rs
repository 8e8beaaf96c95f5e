//! Command-line interface for synlight
//!
//! This binary tokenizes source files and prints the result, either as a raw
//! token list or grouped per line.
//!
//! Usage:
//!   synlight tokens `<path>`                      - Dump the token list as JSON
//!   synlight lines `<path>` [--format `<format>`] - Print per-line token groups

use clap::{Arg, Command};
use synlight::syntax::{highlight_lines, tokenize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("synlight")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize source files for syntax highlighting")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a file and dump the token list as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("lines")
                .about("Segment a file into per-line token groups")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        Some(("lines", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_lines_command(path, format);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let text = read_source(path);
    let tokens = tokenize(&text);
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the lines command
fn handle_lines_command(path: &str, format: &str) {
    let text = read_source(path);
    let lines = highlight_lines(&text);

    match format {
        "json" => match serde_json::to_string_pretty(&lines) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        "text" => {
            for (index, group) in lines.iter().enumerate() {
                let content: String = group.iter().map(|t| t.value.as_str()).collect();
                println!("{:>4} | {}", index + 1, content.trim_end_matches('\n'));
            }
        }
        other => {
            eprintln!("Error: unknown format '{}' (expected 'text' or 'json')", other);
            std::process::exit(1);
        }
    }
}
