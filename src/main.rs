//! Dumptree - nested, cycle-safe structure dumping
//!
//! CLI entry point: reads a JSON document and dumps it to stdout.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::Read as IoRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use dumptree::{ContainedPolicy, Dumper, MaxDepth, Value};

/// Render a JSON document as a nested, cycle-safe debugging dump
///
/// Short aggregates (at most 10 atomic elements, or 5 atomic pairs) collapse
/// to a single line; everything else expands with one indented line per
/// child, bounded by the depth limit.
#[derive(Parser, Debug)]
#[command(name = "dumptree", version, about)]
struct Cli {
    /// JSON file to dump (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Maximum nesting depth to expand: a number or "unlimited"
    #[arg(long)]
    max_depth: Option<MaxDepth>,

    /// Policy for composite objects nested inside composites
    #[arg(long)]
    contained: Option<ContainedPolicy>,
}

/// Read the input document from the given file, or from stdin.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            eprintln!("{}", "Reading JSON from stdin...".dimmed());
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = read_input(cli.file.as_deref())?;
    let json: serde_json::Value =
        serde_json::from_str(&text).context("Input is not valid JSON")?;
    let value = Value::from(json);

    let mut dumper = Dumper::new();
    if let Some(max_depth) = cli.max_depth {
        dumper = dumper.max_depth(max_depth);
    }
    if let Some(policy) = cli.contained {
        dumper = dumper.policy(policy);
    }

    dumper.dump(&value).context("Failed to write dump")
}
