//! Display masks for CPF and CNPJ.

use crate::normalize::normalize;

/// Digit count of a complete CPF.
pub const CPF_DIGITS: usize = 11;

/// Digit count of a complete CNPJ.
pub const CNPJ_DIGITS: usize = 14;

/// Maximum characters kept from the original input when no mask applies.
pub const OVERFLOW_MAX_CHARS: usize = 18;

/// CNPJ group widths and the separator emitted after each group.
const CNPJ_GROUPS: [(usize, Option<char>); 5] = [
    (2, Some('.')),
    (3, Some('.')),
    (3, Some('/')),
    (4, Some('-')),
    (2, None),
];

/// The formatting branch selected by a digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// Up to 11 digits.
    Cpf,
    /// 12 to 14 digits.
    Cnpj,
    /// More than 14 digits; no mask applies.
    Overflow,
}

impl MaskKind {
    /// Selects the branch for a normalized digit count.
    #[must_use]
    pub const fn for_digits(len: usize) -> Self {
        if len > CNPJ_DIGITS {
            Self::Overflow
        } else if len > CPF_DIGITS {
            Self::Cnpj
        } else {
            Self::Cpf
        }
    }

    /// Returns the lowercase label of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Overflow => "overflow",
        }
    }
}

impl std::fmt::Display for MaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats any input into its display mask.
///
/// The branch is chosen from the number of digits in `input`:
///
/// - more than 14 digits: the first 18 characters of `input` as given,
///   punctuation included
/// - 12 to 14 digits: [`mask_cnpj`] over the digits
/// - otherwise: [`mask_cpf`] over the digits
#[must_use]
pub fn format(input: &str) -> String {
    let digits = normalize(input);

    match MaskKind::for_digits(digits.len()) {
        MaskKind::Overflow => input.chars().take(OVERFLOW_MAX_CHARS).collect(),
        MaskKind::Cnpj => mask_cnpj(&digits),
        MaskKind::Cpf => mask_cpf(&digits),
    }
}

/// Applies the CPF mask `XXX.XXX.XXX-XX` to a digit string.
///
/// A `.` follows every complete group of three. Past nine digits the last
/// `.` becomes `-`. Up to nine digits a trailing `.` is kept, so `"123"`
/// renders as `"123."`.
#[must_use]
pub fn mask_cpf(digits: &str) -> String {
    let mut masked = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        masked.push(c);
        if (i + 1) % 3 == 0 {
            masked.push('.');
        }
    }

    if digits.chars().count() > 9 {
        if let Some(pos) = masked.rfind('.') {
            masked.replace_range(pos..pos + 1, "-");
        }
    }

    masked
}

/// Applies the CNPJ mask `XX.XXX.XXX/XXXX-XX` to a digit string.
///
/// Groups beyond the end of `digits` are empty but their separators are
/// still emitted, so `"123456789012"` renders as `"12.345.678/9012-"`.
#[must_use]
pub fn mask_cnpj(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut masked = String::with_capacity(chars.len() + 4);
    let mut start = 0;

    for (width, separator) in CNPJ_GROUPS {
        let end = (start + width).min(chars.len());
        if start < end {
            masked.extend(&chars[start..end]);
        }
        if let Some(sep) = separator {
            masked.push(sep);
        }
        start += width;
    }

    masked
}
