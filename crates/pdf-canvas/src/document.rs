//! Canvas assembling pages from buffered content operators
//!
//! Coordinates on the API are millimetres from the top-left corner of the
//! page; they are converted to PDF points (bottom-left origin) when the
//! operators are generated. Content is buffered per page and flushed into a
//! lopdf document at save time.

use crate::font::CoreFont;
use crate::text::{line_operators, wrap_to_width};
use crate::{Align, CanvasError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::collections::BTreeMap;
use std::path::Path;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// A4 page size in points
const A4_WIDTH: f64 = 595.28;
const A4_HEIGHT: f64 = 841.89;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// A PDF document under construction
///
/// The canvas keeps a text cursor, the FPDF way: `cell` writes a single line
/// and advances the cursor horizontally, `multi_cell` wraps text and advances
/// it vertically, `ln` starts a new line at the left margin.
pub struct Canvas {
    /// Page size in points
    page_width: f64,
    page_height: f64,
    /// Margins in mm
    margin_left: f64,
    margin_top: f64,
    margin_right: f64,
    /// Cursor position in mm from the top-left corner
    x: f64,
    y: f64,
    /// Current font and size in points
    font: Option<(CoreFont, f64)>,
    /// Buffered content operators per page
    pages: Vec<Vec<u8>>,
    /// Font resource names (font -> "F1", "F2", ...)
    font_resources: BTreeMap<CoreFont, String>,
    /// Next font resource number
    next_font_resource: u32,
}

impl Canvas {
    /// Create an empty A4 document with the given orientation
    pub fn new(orientation: Orientation) -> Self {
        let (page_width, page_height) = match orientation {
            Orientation::Portrait => (A4_WIDTH, A4_HEIGHT),
            Orientation::Landscape => (A4_HEIGHT, A4_WIDTH),
        };

        Self {
            page_width,
            page_height,
            margin_left: 10.0,
            margin_top: 10.0,
            margin_right: 10.0,
            x: 10.0,
            y: 10.0,
            font: None,
            pages: Vec::new(),
            font_resources: BTreeMap::new(),
            next_font_resource: 1,
        }
    }

    /// Set the page margins in mm
    pub fn set_margins(&mut self, left: f64, top: f64, right: f64) {
        self.margin_left = left;
        self.margin_top = top;
        self.margin_right = right;
    }

    /// Append a blank page and move the cursor to the top-left margin
    pub fn add_page(&mut self) {
        self.pages.push(Vec::new());
        self.x = self.margin_left;
        self.y = self.margin_top;
    }

    /// Select the current font and size in points
    pub fn set_font(&mut self, font: CoreFont, size: f64) {
        if !self.font_resources.contains_key(&font) {
            let resource_name = format!("F{}", self.next_font_resource);
            self.next_font_resource += 1;
            self.font_resources.insert(font, resource_name);
        }
        self.font = Some((font, size));
    }

    /// Page width minus both horizontal margins, in mm
    pub fn effective_width(&self) -> f64 {
        self.page_width / MM_TO_PT - self.margin_left - self.margin_right
    }

    /// Move the cursor to an absolute position in mm
    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Move the cursor to an absolute vertical position, back at the left margin
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
        self.x = self.margin_left;
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// Line break: down by `h` mm, back to the left margin
    pub fn ln(&mut self, h: f64) {
        self.x = self.margin_left;
        self.y += h;
    }

    /// Width of a string in mm using the current font
    pub fn text_width(&self, text: &str) -> Result<f64> {
        let (font, size) = self.font.ok_or(CanvasError::NoFontSelected)?;
        Ok(font.text_width(text, size) / MM_TO_PT)
    }

    /// Write a single line of text in a cell of width `w` and height `h` mm
    ///
    /// A width of 0 extends the cell to the right margin. The cursor advances
    /// horizontally by the cell width; use `ln` to start the next line.
    pub fn cell(&mut self, w: f64, h: f64, text: &str, align: Align) -> Result<()> {
        let (font, size) = self.font.ok_or(CanvasError::NoFontSelected)?;
        let w = self.resolve_width(w);

        let text_w = font.text_width(text, size) / MM_TO_PT;
        let tx = match align {
            Align::Left | Align::Justify => self.x,
            Align::Center => self.x + (w - text_w) / 2.0,
            Align::Right => self.x + w - text_w,
        };
        let baseline = self.y + 0.5 * h + 0.3 * size / MM_TO_PT;

        self.draw_line(text, tx, baseline, 0.0)?;
        self.x += w;
        Ok(())
    }

    /// Write wrapped text in a cell of width `w` mm, one line per `h` mm
    ///
    /// Input is split on newlines first, then each paragraph is wrapped to
    /// the cell width. The cursor ends at the left margin, below the last
    /// written line.
    pub fn multi_cell(&mut self, w: f64, h: f64, text: &str, align: Align) -> Result<()> {
        let (font, size) = self.font.ok_or(CanvasError::NoFontSelected)?;
        let w = self.resolve_width(w);
        let max_width = w * MM_TO_PT;

        let start_x = self.x;
        for paragraph in text.split('\n') {
            let lines = wrap_to_width(paragraph, font, size, max_width);
            let line_count = lines.len();

            for (i, line) in lines.iter().enumerate() {
                let line_w = font.text_width(line, size);
                let spaces = line.matches(' ').count();

                // Justification stretches every line but the paragraph's last
                let word_spacing = match align {
                    Align::Justify if i + 1 < line_count && spaces > 0 => {
                        (max_width - line_w) / spaces as f64
                    }
                    _ => 0.0,
                };

                let tx = match align {
                    Align::Left | Align::Justify => start_x,
                    Align::Center => start_x + (w - line_w / MM_TO_PT) / 2.0,
                    Align::Right => start_x + w - line_w / MM_TO_PT,
                };
                let baseline = self.y + 0.5 * h + 0.3 * size / MM_TO_PT;

                self.draw_line(line, tx, baseline, word_spacing)?;
                self.y += h;
            }
        }

        self.x = self.margin_left;
        Ok(())
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Save the assembled document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut doc = self.assemble()?;
        doc.save(path)
            .map_err(|e| CanvasError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the assembled document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.assemble()?;
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| CanvasError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    fn resolve_width(&self, w: f64) -> f64 {
        if w == 0.0 {
            self.page_width / MM_TO_PT - self.margin_right - self.x
        } else {
            w
        }
    }

    /// Buffer the operators for one line on the current page
    fn draw_line(&mut self, text: &str, x_mm: f64, baseline_mm: f64, word_spacing: f64) -> Result<()> {
        let (font, size) = self.font.ok_or(CanvasError::NoFontSelected)?;
        let page = self.pages.last_mut().ok_or(CanvasError::NoPage)?;

        if text.is_empty() {
            return Ok(());
        }

        // Resource name exists: set_font registers it
        let resource = &self.font_resources[&font];
        let x = x_mm * MM_TO_PT;
        let y = self.page_height - baseline_mm * MM_TO_PT;

        page.extend_from_slice(&line_operators(text, x, y, resource, size, word_spacing));
        Ok(())
    }

    /// Build the lopdf document: fonts, content streams, page tree, catalog
    fn assemble(&self) -> Result<Document> {
        if self.pages.is_empty() {
            return Err(CanvasError::NoPage);
        }

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (font, resource_name) in &self.font_resources {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => Object::Dictionary(font_dict),
        });

        let mut kids = Vec::with_capacity(self.pages.len());
        for content in &self.pages {
            let content_id =
                doc.add_object(Object::Stream(Stream::new(dictionary! {}, content.clone())));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    self.page_width.into(),
                    self.page_height.into(),
                ],
                "Resources" => Object::Reference(resources_id),
                "Contents" => Object::Reference(content_id),
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => kids.len() as i32,
                "Kids" => kids,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", catalog_id);

        Ok(doc)
    }
}
