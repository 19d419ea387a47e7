//! riffle-wordcount: count words in a text file.
//!
//! Usage:
//!   riffle-wordcount --input=<path> --output=<path>

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use riffle_pipeline::count_lines;
use riffle_pipeline::text::{read_lines, write_lines};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;

    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--input=") {
            input = Some(path.to_string());
        } else if let Some(path) = arg.strip_prefix("--output=") {
            output = Some(path.to_string());
        } else if arg == "--help" || arg == "-h" {
            print_help();
            return Ok(());
        } else {
            bail!("unknown option: {arg} (run with --help for usage)");
        }
    }

    let input = input.context("--input=<path> is required")?;
    let output = output.context("--output=<path> is required")?;

    let lines = read_lines(&input)?;
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let counts = count_lines(line_refs);
    tracing::info!(%input, %output, words = counts.len(), "counted words");
    write_lines(&output, &counts)?;

    Ok(())
}

fn print_help() {
    println!(
        r#"riffle-wordcount v{} — count words in a text file

Usage:
  riffle-wordcount --input=<path> --output=<path>

Options:
  --input=<path>     Text file to read
  --output=<path>    File to write "word: count" lines to
  -h, --help         Show this help
"#,
        env!("CARGO_PKG_VERSION")
    );
}
