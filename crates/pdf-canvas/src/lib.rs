//! PDF Canvas - fixed-size page drawing
//!
//! This crate provides functionality for:
//! - Building a single-page PDF from scratch
//! - Drawing text with the base-14 Helvetica faces (measured placement)
//! - Drawing rectangles, rounded rectangles and lines
//! - Width-measured greedy word wrapping
//!
//! # Example
//!
//! ```
//! use pdf_canvas::{Align, Font, PageCanvas};
//!
//! let mut page = PageCanvas::a4();
//! page.set_font(Font::HelveticaBold, 20.0);
//! page.draw_text("TAX INVOICE", page.width() / 2.0, 60.0, Align::Center);
//! let bytes = page.to_bytes().unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

mod canvas;
mod font;
mod graphics;
mod text;

pub use canvas::{Color, PageCanvas};
pub use font::Font;
pub use text::{generate_text_operators, wrap_text, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Format a coordinate for a content stream, rounded to 0.01pt
///
/// Derived positions (page height minus an offset, centering offsets)
/// carry float noise that would otherwise print in full.
pub(crate) fn fmt_num(v: f64) -> String {
    fmt_trimmed(v, 2)
}

/// Format a color as "r g b", rounded to four decimals
pub(crate) fn fmt_rgb(color: canvas::Color) -> String {
    format!(
        "{} {} {}",
        fmt_trimmed(color.r, 4),
        fmt_trimmed(color.g, 4),
        fmt_trimmed(color.b, 4)
    )
}

fn fmt_trimmed(v: f64, decimals: usize) -> String {
    let mut s = format!("{v:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
