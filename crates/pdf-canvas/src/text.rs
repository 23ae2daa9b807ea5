//! Text operator generation and line wrapping

use crate::font::{encode_win_ansi, CoreFont};

/// Escape a WinAnsi byte string for a PDF literal string
///
/// Backslashes and parentheses must be escaped; everything else passes
/// through as raw bytes.
fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if b == b'\\' || b == b'(' || b == b')' {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}

/// Generate PDF operators for one line of text
///
/// Creates the text operators (BT, Tf, Tw, Td, Tj, ET) to render a line at a
/// specific position. `word_spacing` is the extra spacing in points applied
/// to every space character (the `Tw` operator), used for justification.
///
/// # Arguments
/// * `text` - Text to render (encoded to WinAnsi here)
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `font_resource` - Page font resource name (e.g., "F1")
/// * `font_size` - Font size in points
/// * `word_spacing` - Extra spacing per space character in points
pub(crate) fn line_operators(
    text: &str,
    x: f64,
    y: f64,
    font_resource: &str,
    font_size: f64,
    word_spacing: f64,
) -> Vec<u8> {
    let mut ops: Vec<u8> = Vec::new();

    ops.extend_from_slice(b"BT\n");
    ops.extend_from_slice(format!("/{font_resource} {font_size} Tf\n").as_bytes());
    ops.extend_from_slice(format!("{word_spacing:.3} Tw\n").as_bytes());
    ops.extend_from_slice(format!("{x:.2} {y:.2} Td\n").as_bytes());

    ops.push(b'(');
    ops.extend_from_slice(&escape_literal(&encode_win_ansi(text)));
    ops.extend_from_slice(b") Tj\n");

    ops.extend_from_slice(b"ET\n");
    ops
}

/// Split text into lines that fit a maximum width
///
/// Splits on spaces and measures each candidate line with the font metrics.
/// A word wider than the limit is left alone on its line. Always returns at
/// least one (possibly empty) line.
///
/// # Arguments
/// * `text` - Text to split (no embedded newlines)
/// * `font` - Font used for measuring
/// * `size` - Font size in points
/// * `max_width` - Maximum line width in points
pub fn wrap_to_width(text: &str, font: CoreFont, size: f64, max_width: f64) -> Vec<String> {
    if max_width <= 0.0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else {
            let candidate = format!("{current_line} {word}");
            if font.text_width(&candidate, size) <= max_width {
                current_line = candidate;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal(b"a(b)c"), b"a\\(b\\)c".to_vec());
        assert_eq!(escape_literal(b"a\\b"), b"a\\\\b".to_vec());
        assert_eq!(escape_literal(b"plain"), b"plain".to_vec());
    }

    #[test]
    fn test_line_operators_shape() {
        let ops = line_operators("Hello", 100.0, 700.0, "F1", 12.0, 0.0);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("BT"));
        assert!(ops_str.contains("/F1 12 Tf"));
        assert!(ops_str.contains("0.000 Tw"));
        assert!(ops_str.contains("100.00 700.00 Td"));
        assert!(ops_str.contains("(Hello) Tj"));
        assert!(ops_str.contains("ET"));
    }

    #[test]
    fn test_line_operators_word_spacing() {
        let ops = line_operators("a b", 0.0, 0.0, "F2", 16.0, 1.25);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1.250 Tw"));
    }

    #[test]
    fn test_line_operators_escapes_parens() {
        let ops = line_operators("(x)", 0.0, 0.0, "F1", 12.0, 0.0);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("(\\(x\\)) Tj"));
    }

    #[test]
    fn test_wrap_to_width_splits() {
        // "Hello world" at 12pt Times is ~59pt wide; force a break
        let lines = wrap_to_width("Hello world again", CoreFont::TimesRoman, 12.0, 40.0);
        assert_eq!(lines, vec!["Hello", "world", "again"]);
    }

    #[test]
    fn test_wrap_to_width_single_line() {
        let lines = wrap_to_width("Hello world", CoreFont::TimesRoman, 12.0, 500.0);
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_to_width_empty() {
        let lines = wrap_to_width("", CoreFont::TimesRoman, 12.0, 100.0);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wrap_to_width_long_word_kept_whole() {
        let lines = wrap_to_width("Supercalifragilistic", CoreFont::TimesRoman, 12.0, 10.0);
        assert_eq!(lines, vec!["Supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_to_width_zero_max() {
        let lines = wrap_to_width("Hello world", CoreFont::TimesRoman, 12.0, 0.0);
        assert_eq!(lines, vec!["Hello world"]);
    }
}
