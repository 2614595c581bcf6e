//! Error types for strict document parsing.

use thiserror::Error;

/// Errors that can occur when parsing a [`crate::Cpf`], [`crate::Cnpj`] or
/// [`crate::Document`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The input contains no digits.
    #[error("document cannot be empty")]
    Empty,

    /// The digit count does not match the document kind.
    #[error("invalid {kind} length: expected {expected} digits, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// Every digit is the same, e.g. `000.000.000-00`.
    #[error("invalid {kind}: repeated-digit sequence")]
    RepeatedDigits { kind: &'static str },

    /// The check digits do not match the base digits.
    #[error("invalid {kind}: check digits do not match")]
    InvalidCheckDigits { kind: &'static str },
}

impl DocumentError {
    /// Returns true if this error indicates the input had no digits.
    pub fn is_empty(&self) -> bool {
        matches!(self, DocumentError::Empty)
    }

    /// Returns true if this error indicates a wrong digit count.
    pub fn is_length_error(&self) -> bool {
        matches!(self, DocumentError::InvalidLength { .. })
    }

    /// Returns true if the digit count was right but the checksum failed.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            DocumentError::RepeatedDigits { .. } | DocumentError::InvalidCheckDigits { .. }
        )
    }
}
