//! Normalize command.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::print_output;

use super::{CommandContext, ValuesArgs};

#[derive(Debug, Serialize, Tabled)]
struct NormalizedRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Digits")]
    digits: String,
}

fn rows(values: Vec<String>) -> Vec<NormalizedRow> {
    values
        .into_iter()
        .map(|input| NormalizedRow {
            digits: docmask::normalize(&input),
            input,
        })
        .collect()
}

pub fn run(ctx: CommandContext, args: ValuesArgs) -> Result<()> {
    let values = input::collect(&args.values)?;
    print_output(&rows(values), ctx.format);
    Ok(())
}
