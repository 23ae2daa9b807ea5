//! CPF validation and formatting

use crate::{BrTextError, Result};

/// Normalize a CPF to the standard `XXX.XXX.XXX-XX` form
///
/// Strips every non-digit character first, so any punctuation style is
/// accepted on input. The remaining digit count must be exactly 11.
///
/// # Examples
/// ```
/// use br_text::normalize_cpf;
/// assert_eq!(normalize_cpf("12345678909").unwrap(), "123.456.789-09");
/// assert_eq!(normalize_cpf("123.456.789-09").unwrap(), "123.456.789-09");
/// assert!(normalize_cpf("111.222.333").is_err());
/// ```
pub fn normalize_cpf(raw: &str) -> Result<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != 11 {
        return Err(BrTextError::InvalidCpf {
            value: digits.clone(),
            digits: digits.len(),
        });
    }

    Ok(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}
