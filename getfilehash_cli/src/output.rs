//! Result rendering
//!
//! Text output mirrors what the original window displayed: the digest
//! next to its algorithm label, plus basic source metadata (file size,
//! or character and byte counts for text).

use crate::progress::format_bytes;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Output format for results
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Resolve an optional CLI override against the configured default
    pub fn resolve(arg: Option<OutputFormat>, configured: &str) -> OutputFormat {
        match arg {
            Some(format) => format,
            None => {
                if configured.eq_ignore_ascii_case("json") {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                }
            }
        }
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    source: &'a str,
    algorithm: &'a str,
    digest: &'a str,
    size_bytes: u64,
}

#[derive(Serialize)]
struct TextReport<'a> {
    algorithm: &'a str,
    digest: &'a str,
    characters: usize,
    bytes: u64,
}

/// Render a completed file hash
pub fn print_file_result(
    format: OutputFormat,
    path: &Path,
    algorithm: &str,
    digest: &str,
    size_bytes: u64,
    color: bool,
) {
    match format {
        OutputFormat::Json => {
            let source = path.display().to_string();
            let report = FileReport {
                source: &source,
                algorithm,
                digest,
                size_bytes,
            };
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        OutputFormat::Text => {
            let label = format!("{algorithm}:");
            if color {
                println!("{} {}", label.bold(), digest.green());
            } else {
                println!("{label} {digest}");
            }
            println!("Size: {} ({size_bytes} bytes)", format_bytes(size_bytes));
        }
    }
}

/// Render a completed text hash
pub fn print_text_result(
    format: OutputFormat,
    algorithm: &str,
    digest: &str,
    characters: usize,
    bytes: u64,
    color: bool,
) {
    match format {
        OutputFormat::Json => {
            let report = TextReport {
                algorithm,
                digest,
                characters,
                bytes,
            };
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        OutputFormat::Text => {
            let label = format!("{algorithm}:");
            if color {
                println!("{} {}", label.bold(), digest.green());
            } else {
                println!("{label} {digest}");
            }
            println!("Characters: {characters}");
            println!("Bytes: {bytes}");
        }
    }
}
