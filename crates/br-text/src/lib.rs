//! BR Text - Brazilian-Portuguese text formatting
//!
//! This crate provides:
//! - Long-form pt-BR date formatting ("07 de agosto de 2026")
//! - Currency formatting with the comma decimal separator ("150,50")
//! - CPF validation and formatting ("123.456.789-09")
//! - ASCII transliteration of accented text (for filenames)
//!
//! # Example
//!
//! ```ignore
//! use br_text::{format_currency, format_date_long, normalize_cpf, PT_BR};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! assert_eq!(format_date_long(date, &PT_BR), "01 de março de 2024");
//! assert_eq!(format_currency(150.5), "150,50");
//! assert_eq!(normalize_cpf("123.456.789-09")?, "123.456.789-09");
//! ```

mod cpf;
mod formatter;
mod translit;

pub use cpf::normalize_cpf;
pub use formatter::{format_currency, format_date_long, format_service_dates, DateLocale, PT_BR};
pub use translit::ascii_fold;

use thiserror::Error;

/// Errors that can occur during text formatting
#[derive(Debug, Error)]
pub enum BrTextError {
    #[error("CPF {value} contains {digits} digits instead of 11")]
    InvalidCpf { value: String, digits: usize },
}

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, BrTextError>;
