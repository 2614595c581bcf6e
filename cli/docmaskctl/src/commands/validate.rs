//! Validate command.
//!
//! Exits non-zero when any value is not a valid CPF or CNPJ, so it can gate
//! scripts and CI jobs.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::input;
use crate::output::{print_output, validity_cell};

use super::{CommandContext, ValuesArgs};

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Masked")]
    masked: String,
    #[tabled(rename = "Result", display = "display_valid")]
    valid: bool,
}

fn display_valid(valid: &bool) -> String {
    validity_cell(Some(*valid))
}

fn row(input: String) -> ValidationRow {
    let digits = docmask::normalize(&input);
    let (kind, valid) = match digits.len() {
        docmask::CPF_DIGITS => ("cpf", docmask::validate_cpf(&digits)),
        docmask::CNPJ_DIGITS => ("cnpj", docmask::validate_cnpj(&digits)),
        _ => ("unknown", false),
    };

    ValidationRow {
        masked: docmask::format(&input),
        input,
        kind,
        valid,
    }
}

pub fn run(ctx: CommandContext, args: ValuesArgs) -> Result<()> {
    let values = input::collect(&args.values)?;
    let rows: Vec<ValidationRow> = values.into_iter().map(row).collect();
    print_output(&rows, ctx.format);

    let count = rows.iter().filter(|r| !r.valid).count();
    if count > 0 {
        tracing::debug!(count, total = rows.len(), "validation failures");
        return Err(CliError::InvalidDocuments {
            count,
            total: rows.len(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf_row() {
        let r = row("529.982.247-25".to_string());
        assert_eq!(r.kind, "cpf");
        assert!(r.valid);
        assert_eq!(r.masked, "529.982.247-25");
    }

    #[test]
    fn test_invalid_cnpj_row() {
        let r = row("11444777000160".to_string());
        assert_eq!(r.kind, "cnpj");
        assert!(!r.valid);
        assert_eq!(r.masked, "11.444.777/0001-60");
    }

    #[test]
    fn test_unknown_length_row() {
        let r = row("12345".to_string());
        assert_eq!(r.kind, "unknown");
        assert!(!r.valid);
    }
}
