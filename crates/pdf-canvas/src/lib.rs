//! PDF Canvas - fixed-layout PDF page drawing
//!
//! This crate provides functionality for:
//! - Creating A4 documents from scratch (portrait or landscape)
//! - Writing text with the builtin Type1 core fonts (WinAnsi encoded)
//! - Cursor-based cells with wrapping, alignment and justification
//! - Saving the assembled document to a file or to bytes
//!
//! # Example
//!
//! ```ignore
//! use pdf_canvas::{Align, Canvas, CoreFont, Orientation};
//!
//! let mut canvas = Canvas::new(Orientation::Landscape);
//! canvas.set_margins(20.0, 20.0, 20.0);
//! canvas.add_page();
//! canvas.set_font(CoreFont::TimesRoman, 16.0);
//! canvas.multi_cell(0.0, 8.0, "Hello, World!", Align::Center)?;
//! canvas.save("output.pdf")?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Canvas, Orientation};
pub use font::CoreFont;
pub use text::wrap_to_width;

use thiserror::Error;

/// Errors that can occur while drawing or saving a document
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("no page has been added to the document")]
    NoPage,

    #[error("no font has been selected")]
    NoFontSelected,

    #[error("failed to save PDF: {0}")]
    SaveError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Horizontal cell alignment
///
/// `Justify` stretches inter-word spacing to the full cell width on every
/// wrapped line except the last one of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}
