//! # docmask
//!
//! Masking, normalization, and check-digit validation for Brazilian
//! taxpayer identifiers.
//!
//! ## Formats
//!
//! | Document | Digits | Mask                 |
//! |----------|--------|----------------------|
//! | CPF      | 11     | `123.456.789-01`     |
//! | CNPJ     | 14     | `12.345.678/9012-34` |
//!
//! The mask is chosen from the digit count alone, so partially typed values
//! render progressively:
//!
//! - up to 11 digits use the CPF mask
//! - 12 to 14 digits use the CNPJ mask
//! - more than 14 digits are not masked; the original input is clipped to
//!   18 characters instead
//!
//! ## Layers
//!
//! - [`normalize`], [`format`], [`validate_cpf`], [`validate_cnpj`]: pure
//!   functions that never fail
//! - [`FieldBinding`]: view/model rendering for an input field, with the
//!   masked-model and digit-validation switches passed in explicitly
//! - [`Cpf`], [`Cnpj`], [`Document`]: strictly parsed values that are
//!   guaranteed to carry valid check digits

mod checksum;
mod error;
mod field;
mod macros;
mod mask;
mod normalize;
mod types;

pub use checksum::{check_digits_cnpj, check_digits_cpf, validate, validate_cnpj, validate_cpf};
pub use error::DocumentError;
pub use field::{FieldBinding, FieldOptions, Rendered};
pub use mask::{
    format, mask_cnpj, mask_cpf, MaskKind, CNPJ_DIGITS, CPF_DIGITS, OVERFLOW_MAX_CHARS,
};
pub use normalize::normalize;
pub use types::*;
