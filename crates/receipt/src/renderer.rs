//! Receipt rendering
//!
//! Drives the canvas through the fixed single-page landscape layout:
//! centered letterhead, title, justified narrative, date columns at fixed
//! horizontal offsets, trailer and footer.

use crate::body::{receipt_filename, Receipt, ReceiptBody};
use crate::config::{Layout, Letterhead};
use crate::Result;
use br_text::DateLocale;
use pdf_canvas::{Align, Canvas, CoreFont, Orientation};
use std::path::{Path, PathBuf};
use tracing::info;

/// Render one receipt to `output_dir/recibo_<name>.pdf`
///
/// Validation and rendering failures propagate; the caller decides whether
/// they are fatal (they are, for the production run).
pub fn render(
    receipt: &Receipt,
    letterhead: &Letterhead,
    layout: &Layout,
    locale: &DateLocale,
    output_dir: &Path,
) -> Result<PathBuf> {
    let body = ReceiptBody::build(receipt, letterhead, locale)?;

    let mut canvas = Canvas::new(Orientation::Landscape);
    canvas.set_margins(layout.margin_left, layout.margin_top, layout.margin_right);
    canvas.add_page();

    canvas.set_font(CoreFont::TimesRoman, layout.header_font_size);
    canvas.multi_cell(0.0, layout.line_height, &letterhead.header, Align::Center)?;
    canvas.ln(layout.after_header_gap);

    canvas.set_font(CoreFont::TimesBold, layout.title_font_size);
    canvas.cell(0.0, layout.line_height, "RECIBO", Align::Center)?;
    canvas.ln(layout.after_title_gap);

    canvas.set_font(CoreFont::TimesRoman, layout.body_font_size);
    canvas.multi_cell(0.0, layout.line_height, &body.narrative, Align::Justify)?;

    // Every date column hangs from the same vertical anchor, slightly above
    // the narrative's end
    let anchor = canvas.get_y() - layout.date_block_rise;
    for (index, column) in body.date_columns.iter().enumerate() {
        let x = layout.date_col_x + layout.date_col_stride * index as f64;
        canvas.set_xy(x, anchor);
        canvas.multi_cell(0.0, layout.line_height, column, Align::Justify)?;
    }

    canvas.set_y(anchor + layout.trailer_offset);
    canvas.cell(0.0, layout.trailer_line_height, &body.trailer, Align::Center)?;
    canvas.ln(layout.footer_gap);

    canvas.multi_cell(0.0, layout.line_height, &letterhead.footer, Align::Center)?;

    let path = output_dir.join(receipt_filename(&receipt.name));
    canvas.save(&path)?;
    info!(file = %path.display(), "receipt rendered");

    Ok(path)
}
