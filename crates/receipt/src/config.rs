//! Letterhead and page layout configuration

use serde::Deserialize;

/// Fixed text blocks printed on every receipt
///
/// Loaded from the configuration file; the defaults are placeholders meant
/// to be replaced with the professional's real data.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Letterhead {
    /// Multi-line block centered at the top of the page
    pub header: String,
    /// Multi-line block centered at the bottom (signature line)
    pub footer: String,
    /// City/state printed next to the signature date
    pub location: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            header: "My Name\nMy Job\nMy Subscription number".to_string(),
            footer: "_______________________________________\nMy Full Name\nCPF: 000.000.000-00"
                .to_string(),
            location: "MyCity-State".to_string(),
        }
    }
}

/// Page geometry for the receipt, in millimetres and points
///
/// Passed explicitly to `render`; the default reproduces the production
/// page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    /// Font sizes in points
    pub header_font_size: f64,
    pub title_font_size: f64,
    pub body_font_size: f64,
    /// Cell heights in mm
    pub line_height: f64,
    pub trailer_line_height: f64,
    /// Vertical gaps in mm
    pub after_header_gap: f64,
    pub after_title_gap: f64,
    /// Date block geometry: first column x, stride between columns, rise of
    /// the shared anchor above the narrative's end
    pub date_col_x: f64,
    pub date_col_stride: f64,
    pub date_block_rise: f64,
    /// Trailer sits this far below the date anchor; footer follows after
    /// another gap
    pub trailer_offset: f64,
    pub footer_gap: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin_left: 20.0,
            margin_top: 20.0,
            margin_right: 20.0,
            header_font_size: 18.0,
            title_font_size: 22.0,
            body_font_size: 16.0,
            line_height: 8.0,
            trailer_line_height: 10.0,
            after_header_gap: 10.0,
            after_title_gap: 24.0,
            date_col_x: 40.0,
            date_col_stride: 80.0,
            date_block_rise: 8.0,
            trailer_offset: 32.0,
            footer_gap: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_letterhead_has_three_header_lines() {
        let letterhead = Letterhead::default();
        assert_eq!(letterhead.header.lines().count(), 3);
        assert_eq!(letterhead.footer.lines().count(), 3);
    }

    #[test]
    fn test_default_layout_matches_production_page() {
        let layout = Layout::default();
        assert_eq!(layout.margin_left, 20.0);
        assert_eq!(layout.date_col_x, 40.0);
        assert_eq!(layout.date_col_stride, 80.0);
        assert_eq!(layout.title_font_size, 22.0);
    }
}
