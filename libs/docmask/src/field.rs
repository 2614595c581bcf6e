//! View/model rendering for a CPF/CNPJ input field.
//!
//! An input field carries two values: the *view* the user sees and edits,
//! and the *model* handed to the rest of the application. [`FieldBinding`]
//! computes both from whichever side changed, plus an optional validity
//! flag. It holds no state between calls; the options are fixed at
//! construction.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::checksum::{validate_cnpj, validate_cpf};
use crate::mask::{format, MaskKind};
use crate::normalize::normalize;

/// Switches for a [`FieldBinding`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Send the masked value to the model instead of raw digits.
    pub model_mask: bool,

    /// Run check-digit validation on every render.
    pub validate_digit: bool,
}

/// Result of rendering a field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Value to display.
    pub view: String,

    /// Value for the application model.
    pub model: String,

    /// Check-digit outcome. `None` when validation is disabled or the
    /// value is too long for either document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<bool>,
}

/// Renders field values in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldBinding {
    options: FieldOptions,
}

impl FieldBinding {
    /// Creates a binding with the given options.
    pub fn new(options: FieldOptions) -> Self {
        Self { options }
    }

    /// Returns the options this binding was built with.
    pub fn options(&self) -> FieldOptions {
        self.options
    }

    /// Handles a value typed into the view.
    ///
    /// The view is re-masked. The model receives the masked view when
    /// `model_mask` is set, raw digits otherwise. Absent or empty input
    /// returns `None` and should be left as it is.
    pub fn from_view(&self, value: Option<&str>) -> Option<Rendered> {
        let value = value.filter(|v| !v.is_empty())?;

        let view = format(value);
        let model = if self.options.model_mask {
            view.clone()
        } else {
            normalize(&view)
        };
        let validity = self.check(value);

        trace!(view = %view, model = %model, ?validity, "rendered from view");

        Some(Rendered {
            view,
            model,
            validity,
        })
    }

    /// Handles a value assigned to the model.
    ///
    /// The model is reduced to raw digits and the view gets the mask.
    /// Absent or empty input returns `None` and should be left as it is.
    pub fn from_model(&self, value: Option<&str>) -> Option<Rendered> {
        let value = value.filter(|v| !v.is_empty())?;

        let model = normalize(value);
        let view = format(&model);
        let validity = self.check(&model);

        trace!(view = %view, model = %model, ?validity, "rendered from model");

        Some(Rendered {
            view,
            model,
            validity,
        })
    }

    /// Validates against the document the digit count points to.
    ///
    /// Partial input is checked too and fails, so the field stays invalid
    /// until a complete document has been typed.
    fn check(&self, value: &str) -> Option<bool> {
        if !self.options.validate_digit {
            return None;
        }

        let digits = normalize(value);
        let kind = MaskKind::for_digits(digits.len());
        let valid = match kind {
            MaskKind::Cpf => validate_cpf(&digits),
            MaskKind::Cnpj => validate_cnpj(&digits),
            MaskKind::Overflow => return None,
        };

        if !valid {
            debug!(%kind, digits = digits.len(), "check digits rejected");
        }

        Some(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(model_mask: bool, validate_digit: bool) -> FieldBinding {
        FieldBinding::new(FieldOptions {
            model_mask,
            validate_digit,
        })
    }

    #[test]
    fn test_absent_and_empty_pass_through() {
        let b = binding(false, true);
        assert_eq!(b.from_view(None), None);
        assert_eq!(b.from_view(Some("")), None);
        assert_eq!(b.from_model(None), None);
        assert_eq!(b.from_model(Some("")), None);
    }

    #[test]
    fn test_view_sends_raw_digits_to_model_by_default() {
        let rendered = binding(false, false).from_view(Some("52998224725")).unwrap();
        assert_eq!(rendered.view, "529.982.247-25");
        assert_eq!(rendered.model, "52998224725");
        assert_eq!(rendered.validity, None);
    }

    #[test]
    fn test_view_sends_mask_to_model_when_enabled() {
        let rendered = binding(true, false).from_view(Some("11444777000161")).unwrap();
        assert_eq!(rendered.view, "11.444.777/0001-61");
        assert_eq!(rendered.model, "11.444.777/0001-61");
    }

    #[test]
    fn test_model_side_always_stores_digits() {
        let rendered = binding(true, false).from_model(Some("529.982.247-25")).unwrap();
        assert_eq!(rendered.model, "52998224725");
        assert_eq!(rendered.view, "529.982.247-25");
    }

    #[test]
    fn test_validation_of_complete_documents() {
        let b = binding(false, true);
        assert_eq!(b.from_view(Some("529.982.247-25")).unwrap().validity, Some(true));
        assert_eq!(b.from_view(Some("529.982.247-24")).unwrap().validity, Some(false));
        assert_eq!(b.from_model(Some("11444777000161")).unwrap().validity, Some(true));
        assert_eq!(b.from_model(Some("11444777000160")).unwrap().validity, Some(false));
    }

    #[test]
    fn test_partial_input_is_invalid_while_typing() {
        let b = binding(false, true);
        let rendered = b.from_view(Some("5299")).unwrap();
        assert_eq!(rendered.view, "529.9");
        assert_eq!(rendered.validity, Some(false));

        let rendered = b.from_view(Some("1144477700016")).unwrap();
        assert_eq!(rendered.view, "11.444.777/0001-6");
        assert_eq!(rendered.validity, Some(false));
    }

    #[test]
    fn test_overflow_skips_validation() {
        let rendered = binding(false, true)
            .from_view(Some("12.345.678/9012-345"))
            .unwrap();
        assert_eq!(rendered.view, "12.345.678/9012-34");
        assert_eq!(rendered.model, "12345678901234");
        assert_eq!(rendered.validity, None);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FieldOptions = serde_json::from_str(r#"{"model_mask": true}"#).unwrap();
        assert!(options.model_mask);
        assert!(!options.validate_digit);
    }
}
