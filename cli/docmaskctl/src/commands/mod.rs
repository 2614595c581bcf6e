//! CLI commands.

mod complete;
mod config;
mod field;
mod format;
mod inspect;
mod normalize;
mod validate;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docmask::FieldOptions;

use crate::config::Config;
use crate::output::OutputFormat;

/// docmask CLI - Format, normalize, and validate CPF/CNPJ numbers.
#[derive(Debug, Parser)]
#[command(name = "docmask")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to the config file, then table.
    #[arg(long, global = true)]
    format: Option<String>,

    /// Send the masked value to the model instead of raw digits.
    #[arg(long, global = true)]
    model_mask: bool,

    /// Validate check digits while formatting.
    #[arg(long, global = true)]
    validate_digit: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Strip everything but digits.
    Normalize(ValuesArgs),

    /// Apply the CPF or CNPJ mask.
    Format(ValuesArgs),

    /// Check the digits of complete CPF/CNPJ values.
    Validate(ValuesArgs),

    /// Render values as an input field would (view, model, validity).
    Field(field::FieldCommand),

    /// Strictly parse a single CPF or CNPJ.
    Inspect(inspect::InspectCommand),

    /// Append check digits to a CPF or CNPJ base.
    Complete(complete::CompleteCommand),

    /// Show configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

/// Values to process.
#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// Values to process. Use `-` to read one per line from stdin.
    #[arg(required = true, value_name = "VALUE")]
    values: Vec<String>,
}

impl Cli {
    /// Whether debug logging was requested.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;

        // Flags win over config
        let format = OutputFormat::from_name(
            self.format
                .as_deref()
                .or(config.format.as_deref())
                .unwrap_or("table"),
        );
        let field = FieldOptions {
            model_mask: self.model_mask || config.field.model_mask,
            validate_digit: self.validate_digit || config.field.validate_digit,
        };

        tracing::debug!(?format, ?field, "resolved options");

        let ctx = CommandContext { format, field };

        match self.command {
            Commands::Normalize(args) => normalize::run(ctx, args),
            Commands::Format(args) => format::run(ctx, args),
            Commands::Validate(args) => validate::run(ctx, args),
            Commands::Field(cmd) => cmd.run(ctx),
            Commands::Inspect(cmd) => cmd.run(ctx),
            Commands::Complete(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("docmask {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub field: FieldOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docmask",
            "format",
            "52998224725",
            "--validate-digit",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.validate_digit);
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(matches!(cli.command, Commands::Format(_)));
    }

    #[test]
    fn values_are_required() {
        assert!(Cli::try_parse_from(["docmask", "normalize"]).is_err());
    }
}
