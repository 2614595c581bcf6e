//! Field command.
//!
//! Shows what an input field bound to the mask would display and store.

use anyhow::Result;
use clap::Args;
use docmask::{FieldBinding, Rendered};
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::{print_output, validity_cell};

use super::CommandContext;

/// Render values through a field binding.
#[derive(Debug, Args)]
pub struct FieldCommand {
    /// Treat values as model assignments instead of typed view input.
    #[arg(long)]
    from_model: bool,

    /// Values to render. Use `-` to read one per line from stdin.
    #[arg(required = true, value_name = "VALUE")]
    values: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "View")]
    view: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Validity", display = "display_validity")]
    #[serde(skip_serializing_if = "Option::is_none")]
    validity: Option<bool>,
}

fn display_validity(validity: &Option<bool>) -> String {
    validity_cell(*validity)
}

fn render(binding: &FieldBinding, from_model: bool, input: String) -> FieldRow {
    let rendered = if from_model {
        binding.from_model(Some(&input))
    } else {
        binding.from_view(Some(&input))
    };

    // input::collect never yields empty values, but keep the pass-through
    let Rendered {
        view,
        model,
        validity,
    } = rendered.unwrap_or_else(|| Rendered {
        view: input.clone(),
        model: input.clone(),
        validity: None,
    });

    FieldRow {
        input,
        view,
        model,
        validity,
    }
}

impl FieldCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let binding = FieldBinding::new(ctx.field);
        let values = input::collect(&self.values)?;

        let rows: Vec<FieldRow> = values
            .into_iter()
            .map(|v| render(&binding, self.from_model, v))
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmask::FieldOptions;

    #[test]
    fn test_render_view_with_masked_model() {
        let binding = FieldBinding::new(FieldOptions {
            model_mask: true,
            validate_digit: true,
        });
        let row = render(&binding, false, "52998224725".to_string());
        assert_eq!(row.view, "529.982.247-25");
        assert_eq!(row.model, "529.982.247-25");
        assert_eq!(row.validity, Some(true));
    }

    #[test]
    fn test_render_from_model() {
        let binding = FieldBinding::default();
        let row = render(&binding, true, "11.444.777/0001-61".to_string());
        assert_eq!(row.view, "11.444.777/0001-61");
        assert_eq!(row.model, "11444777000161");
        assert_eq!(row.validity, None);
    }
}
