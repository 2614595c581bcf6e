//! Input value collection.
//!
//! Values come from positional arguments. A lone `-` reads one value per
//! line from stdin instead.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::error::CliError;

/// Argument that stands for stdin.
const STDIN_MARKER: &str = "-";

/// Collect values from arguments, expanding `-` from stdin.
pub fn collect(args: &[String]) -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    collect_from(args, stdin.lock())
}

/// Collect values from arguments, expanding `-` from `reader`.
///
/// Blank lines are skipped and line endings trimmed; other whitespace is
/// kept since normalization drops it anyway.
pub fn collect_from<R: BufRead>(args: &[String], reader: R) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(args.len());
    let mut reader = Some(reader);

    for arg in args {
        if arg != STDIN_MARKER {
            values.push(arg.clone());
            continue;
        }

        // stdin can only be drained once
        let Some(r) = reader.take() else {
            continue;
        };
        for line in r.lines() {
            let line = line.context("Failed to read value from stdin")?;
            let line = line.trim_end_matches('\r');
            if !line.trim().is_empty() {
                values.push(line.to_string());
            }
        }
    }

    if values.is_empty() {
        return Err(CliError::NoInput.into());
    }

    tracing::debug!(count = values.len(), "collected input values");
    Ok(values)
}
