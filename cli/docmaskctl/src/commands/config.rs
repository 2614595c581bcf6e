//! Config commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::config_path;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Show configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration (file, env, and flags merged).
    Show,

    /// Print the config file path.
    Path,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    format: String,
    model_mask: bool,
    validate_digit: bool,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Path => {
                println!("{}", config_path()?.display());
                Ok(())
            }
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        format: match ctx.format {
            OutputFormat::Json => "json".to_string(),
            OutputFormat::Table => "table".to_string(),
        },
        model_mask: ctx.field.model_mask,
        validate_digit: ctx.field.validate_digit,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!("format: {}", view.format);
            println!("model_mask: {}", view.model_mask);
            println!("validate_digit: {}", view.validate_digit);
        }
    }

    Ok(())
}
