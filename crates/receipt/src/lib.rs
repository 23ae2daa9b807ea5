//! Receipt - model, body assembly and PDF rendering
//!
//! This crate provides:
//! - The `Receipt` data extracted from one spreadsheet row
//! - `Letterhead` and `Layout` configuration types
//! - Body assembly (narrative sentence, date columns, trailer)
//! - Rendering one landscape-A4 PDF per receipt
//!
//! # Example
//!
//! ```ignore
//! use receipt::{render, Layout, Letterhead, Receipt};
//!
//! let receipt = Receipt {
//!     name: "Ana Silva".into(),
//!     cpf: "123.456.789-09".into(),
//!     value: 150.5,
//!     service_dates: vec![],
//!     signature_date: None,
//! };
//! let path = render(
//!     &receipt,
//!     &Letterhead::default(),
//!     &Layout::default(),
//!     &br_text::PT_BR,
//!     std::path::Path::new("."),
//! )?;
//! ```

mod body;
mod config;
mod renderer;

pub use body::{receipt_filename, Receipt, ReceiptBody, DATES_PER_COLUMN};
pub use config::{Layout, Letterhead};
pub use renderer::render;

use thiserror::Error;

/// Errors that can occur while building or rendering a receipt
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("invalid receipt data: {0}")]
    Data(#[from] br_text::BrTextError),

    #[error("PDF error: {0}")]
    Canvas(#[from] pdf_canvas::CanvasError),
}

/// Result type for receipt operations
pub type Result<T> = std::result::Result<T, ReceiptError>;
