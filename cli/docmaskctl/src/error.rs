//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{count} of {total} value(s) failed check-digit validation")]
    InvalidDocuments { count: usize, total: usize },

    #[error("invalid base '{base}': expected 9 digits (CPF) or 12 digits (CNPJ), got {actual}")]
    InvalidBase { base: String, actual: usize },

    #[error("no input values given")]
    NoInput,

    #[error("invalid config value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error(transparent)]
    Document(#[from] docmask::DocumentError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NoInput => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass values as arguments, or `-` to read one per line from stdin."
                        .yellow()
                );
            }
            CliError::InvalidConfig { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `docmask config path` to locate the config file.".yellow()
                );
            }
            CliError::Document(doc_err) if doc_err.is_length_error() => {
                eprintln!(
                    "\n{}",
                    "Hint: A CPF has 11 digits and a CNPJ has 14.".yellow()
                );
            }
            _ => {}
        }
    }
}
