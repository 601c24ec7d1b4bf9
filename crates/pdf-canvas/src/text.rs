//! Text rendering utilities

use crate::canvas::Color;
use crate::{fmt_num, fmt_rgb, Align, Font};

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Escape a string for a PDF literal string object
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(c),
        }
    }
    out
}

/// Generate PDF operators for text insertion
///
/// Creates the proper PDF text operators (BT, Tf, Td, Tj, ET) to render text
/// at a specific position with alignment support.
///
/// # Arguments
/// * `text` - Text to show (escaped here, WinAnsi literal string)
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    text: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let mut ops = String::new();

    // Calculate X offset for alignment
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };

    let final_x = x + x_offset;

    // Begin Text
    ops.push_str("BT\n");

    // Set text color (rg operator for non-stroking color)
    ops.push_str(&format!("{} rg\n", fmt_rgb(ctx.color)));

    // Set font and size: /F1 12 Tf
    ops.push_str(&format!(
        "/{} {} Tf\n",
        ctx.font_name,
        fmt_num(ctx.font_size)
    ));

    // Move to position: x y Td
    ops.push_str(&format!("{} {} Td\n", fmt_num(final_x), fmt_num(y)));

    // Show text: (literal) Tj
    ops.push_str(&format!("({}) Tj\n", escape_literal(text)));

    // End Text
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Split an overlong word at character granularity
///
/// Accumulates characters until the next one would exceed `max_width` at the
/// given font/size. A single character wider than the limit still gets its
/// own line (nothing narrower exists to emit).
fn split_word(word: &str, font: Font, font_size: f64, max_width: f64, lines: &mut Vec<String>) {
    let mut chunk = String::new();
    for c in word.chars() {
        let mut trial = chunk.clone();
        trial.push(c);
        if !chunk.is_empty() && font.text_width(&trial, font_size) > max_width {
            lines.push(chunk);
            chunk = c.to_string();
        } else {
            chunk = trial;
        }
    }
    if !chunk.is_empty() {
        lines.push(chunk);
    }
}

/// Greedy word wrap driven by measured text width
///
/// Produces lines whose measured width at `font`/`font_size` does not exceed
/// `max_width`. Words are joined with single spaces and never split, unless a
/// word alone exceeds the limit, in which case it is split at character
/// granularity. Whitespace-delimited token order is preserved. Empty or
/// whitespace-only input yields no lines.
pub fn wrap_text(text: &str, font: Font, font_size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if font.text_width(&trial, font_size) <= max_width {
            current = trial;
        } else if current.is_empty() {
            // Word alone is too wide for the column
            split_word(word, font, font_size, max_width, &mut lines);
        } else {
            lines.push(std::mem::take(&mut current));
            if font.text_width(word, font_size) <= max_width {
                current = word.to_string();
            } else {
                split_word(word, font, font_size, max_width, &mut lines);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_generate_text_operators_left() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            text_width: 100.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("Hello", 100.0, 700.0, Align::Left, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("BT"));
        assert!(ops_str.contains("/F1 12 Tf"));
        assert!(ops_str.contains("100 700 Td")); // No offset for left align
        assert!(ops_str.contains("(Hello) Tj"));
        assert!(ops_str.contains("ET"));
    }

    #[test]
    fn test_generate_text_operators_center() {
        let ctx = TextRenderContext {
            font_name: "F2".to_string(),
            font_size: 14.0,
            text_width: 100.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("Test", 200.0, 600.0, Align::Center, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("/F2 14 Tf"));
        assert!(ops_str.contains("150 600 Td")); // 200 - 50 (half of 100)
    }

    #[test]
    fn test_generate_text_operators_right() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 10.0,
            text_width: 80.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("Right", 300.0, 500.0, Align::Right, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("220 500 Td")); // 300 - 80
    }

    #[test]
    fn test_escape_parentheses() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 10.0,
            text_width: 0.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("SAC (997212)", 10.0, 10.0, Align::Left, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("(SAC \\(997212\\)) Tj"));
    }

    #[test]
    fn test_wrap_single_line() {
        let lines = wrap_text("Short", Font::Helvetica, 10.0, 500.0);
        assert_eq!(lines, vec!["Short".to_string()]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", Font::Helvetica, 10.0, 100.0).is_empty());
        assert!(wrap_text("   ", Font::Helvetica, 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_preserves_tokens() {
        let text = "No.5, Third Main Road, Teesta Street, River View Housing Society, Manapakkam";
        let lines = wrap_text(text, Font::Helvetica, 10.0, 120.0);

        assert!(lines.len() > 1);
        let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(tokens(&lines), original);
    }

    #[test]
    fn test_wrap_width_bound() {
        let text = "Rental or leasing services involving own or leased non-residential property";
        let max = 140.0;
        let lines = wrap_text(text, Font::Helvetica, 10.0, max);

        for line in &lines {
            assert!(
                Font::Helvetica.text_width(line, 10.0) <= max,
                "line {line:?} exceeds {max}"
            );
        }
    }

    #[test]
    fn test_wrap_collapses_multiple_spaces() {
        let lines = wrap_text("Hello    world", Font::Helvetica, 10.0, 500.0);
        assert_eq!(lines, vec!["Hello world".to_string()]);
    }

    #[test]
    fn test_wrap_overlong_word_char_split() {
        let word = "33AAJCR6636B1ZJ33AAJCR6636B1ZJ";
        let max = 60.0;
        let lines = wrap_text(word, Font::Helvetica, 10.0, max);

        assert!(lines.len() > 1);
        // Re-joining the chunks reproduces the word
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(Font::Helvetica.text_width(line, 10.0) <= max);
        }
    }

    #[test]
    fn test_wrap_overlong_word_after_full_line() {
        let text = "Plot ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJ";
        let lines = wrap_text(text, Font::Helvetica, 10.0, 60.0);

        assert_eq!(lines[0], "Plot");
        assert!(lines.len() > 2);
    }
}
