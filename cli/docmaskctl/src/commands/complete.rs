//! Complete command (append check digits to a base).

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Append check digits to a 9-digit CPF base or a 12-digit CNPJ base.
#[derive(Debug, Args)]
pub struct CompleteCommand {
    /// Base digits; punctuation is ignored.
    base: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Completed {
    kind: &'static str,
    check_digits: String,
    digits: String,
    masked: String,
}

fn complete(base: &str) -> Result<Completed, CliError> {
    let digits = docmask::normalize(base);

    let (kind, check) = match digits.len() {
        9 => ("CPF", docmask::check_digits_cpf(&digits)),
        12 => ("CNPJ", docmask::check_digits_cnpj(&digits)),
        _ => ("", None),
    };
    let Some([first, second]) = check else {
        return Err(CliError::InvalidBase {
            base: base.to_string(),
            actual: digits.len(),
        });
    };

    let full = format!("{digits}{first}{second}");
    Ok(Completed {
        kind,
        check_digits: format!("{first}{second}"),
        masked: docmask::format(&full),
        digits: full,
    })
}

impl CompleteCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let completed = complete(&self.base)?;

        match ctx.format {
            OutputFormat::Json => print_single(&completed),
            OutputFormat::Table => print_success(&format!(
                "{} {} (check digits {})",
                completed.kind, completed.masked, completed.check_digits
            )),
        }

        Ok(())
    }
}
