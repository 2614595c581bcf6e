//! Modulo-11 check digits for CPF and CNPJ.
//!
//! Both validators take raw digits (see [`crate::normalize`]) and answer
//! with a plain `bool`. Wrong length, non-digit characters, and
//! repeated-digit sequences such as `"11111111111"` are all rejected
//! before any arithmetic runs.

use crate::mask::{CNPJ_DIGITS, CPF_DIGITS};
use crate::normalize::normalize;

/// Parses `raw` into digit values if it is exactly `len` ASCII digits.
fn digit_values(raw: &str, len: usize) -> Option<Vec<u32>> {
    if raw.len() != len {
        return None;
    }
    raw.chars().map(|c| c.to_digit(10)).collect()
}

fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// CPF check digit over `digits`: weights run from `len + 1` down to 2.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        resto => resto,
    }
}

/// CNPJ check digit over `digits`: weights start at `len - 7`, count down,
/// and wrap back to 9 after 2.
fn cnpj_check_digit(digits: &[u32]) -> u32 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0;

    for d in digits {
        sum += d * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validates the two check digits of an 11-digit CPF.
#[must_use]
pub fn validate_cpf(raw: &str) -> bool {
    let Some(digits) = digit_values(raw, CPF_DIGITS) else {
        return false;
    };
    if is_repeated(&digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Validates the two check digits of a 14-digit CNPJ.
#[must_use]
pub fn validate_cnpj(raw: &str) -> bool {
    let Some(digits) = digit_values(raw, CNPJ_DIGITS) else {
        return false;
    };
    if is_repeated(&digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}

/// Validates any input by its digit count.
///
/// Returns `None` when the input normalizes to neither 11 nor 14 digits.
#[must_use]
pub fn validate(input: &str) -> Option<bool> {
    let digits = normalize(input);
    match digits.len() {
        CPF_DIGITS => Some(validate_cpf(&digits)),
        CNPJ_DIGITS => Some(validate_cnpj(&digits)),
        _ => None,
    }
}

/// Computes the two check digits for a 9-digit CPF base.
#[must_use]
pub fn check_digits_cpf(base: &str) -> Option<[u8; 2]> {
    let mut digits = digit_values(base, CPF_DIGITS - 2)?;
    let first = cpf_check_digit(&digits);
    digits.push(first);
    let second = cpf_check_digit(&digits);
    Some([first as u8, second as u8])
}

/// Computes the two check digits for a 12-digit CNPJ base.
#[must_use]
pub fn check_digits_cnpj(base: &str) -> Option<[u8; 2]> {
    let mut digits = digit_values(base, CNPJ_DIGITS - 2)?;
    let first = cnpj_check_digit(&digits);
    digits.push(first);
    let second = cnpj_check_digit(&digits);
    Some([first as u8, second as u8])
}
