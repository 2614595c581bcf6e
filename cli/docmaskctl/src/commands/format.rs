//! Format command.

use anyhow::Result;
use docmask::MaskKind;
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::{print_output, validity_cell};

use super::{CommandContext, ValuesArgs};

#[derive(Debug, Serialize, Tabled)]
struct FormattedRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Kind")]
    kind: MaskKind,
    #[tabled(rename = "Masked")]
    masked: String,
    #[tabled(rename = "Check", display = "display_validity")]
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
}

fn display_validity(valid: &Option<bool>) -> String {
    validity_cell(*valid)
}

fn rows(values: Vec<String>, validate_digit: bool) -> Vec<FormattedRow> {
    values
        .into_iter()
        .map(|input| {
            let kind = MaskKind::for_digits(docmask::normalize(&input).len());
            let valid = if validate_digit {
                docmask::validate(&input)
            } else {
                None
            };
            FormattedRow {
                kind,
                masked: docmask::format(&input),
                valid,
                input,
            }
        })
        .collect()
}

pub fn run(ctx: CommandContext, args: ValuesArgs) -> Result<()> {
    let values = input::collect(&args.values)?;
    print_output(&rows(values, ctx.field.validate_digit), ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_rows_pick_mask_by_length() {
        let rows = rows(
            strings(&["12345678901", "12345678901234", "123456789012345"]),
            false,
        );
        assert_eq!(rows[0].kind, MaskKind::Cpf);
        assert_eq!(rows[0].masked, "123.456.789-01");
        assert_eq!(rows[1].kind, MaskKind::Cnpj);
        assert_eq!(rows[1].masked, "12.345.678/9012-34");
        assert_eq!(rows[2].kind, MaskKind::Overflow);
        assert_eq!(rows[2].masked, "123456789012345");
        assert!(rows.iter().all(|r| r.valid.is_none()));
    }

    #[test]
    fn test_rows_with_validation() {
        let rows = rows(strings(&["52998224725", "11444777000162", "123"]), true);
        assert_eq!(rows[0].valid, Some(true));
        assert_eq!(rows[1].valid, Some(false));
        assert_eq!(rows[2].valid, None);
    }
}
