//! Inspect command.

use anyhow::Result;
use clap::Args;
use docmask::Document;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Strictly parse a single CPF or CNPJ.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// CPF or CNPJ, masked or raw.
    value: String,
}

#[derive(Debug, Serialize)]
struct DocumentView {
    kind: &'static str,
    digits: String,
    masked: String,
}

impl From<&Document> for DocumentView {
    fn from(doc: &Document) -> Self {
        Self {
            kind: doc.kind(),
            digits: doc.as_str().to_string(),
            masked: doc.masked(),
        }
    }
}

fn inspect(value: &str) -> Result<DocumentView, CliError> {
    let doc = Document::parse(value)?;
    Ok(DocumentView::from(&doc))
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = inspect(&self.value)?;

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("kind: {}", view.kind);
                println!("digits: {}", view.digits);
                println!("masked: {}", view.masked);
            }
        }

        Ok(())
    }
}
