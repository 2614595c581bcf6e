//! Digit extraction.

/// Strips every character that is not an ASCII digit.
///
/// Punctuation, whitespace, letters and non-ASCII digits are all dropped,
/// so `normalize("123.456.789-01")` yields `"12345678901"`. Empty input
/// yields an empty string.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
