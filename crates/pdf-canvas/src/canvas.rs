//! Fixed-size page canvas

use crate::graphics::{
    generate_fill_rect, generate_fill_round_rect, generate_line, generate_stroke_rect,
    generate_stroke_round_rect,
};
use crate::text::{generate_text_operators, TextRenderContext};
use crate::{Align, Font, PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// A4 page size in points
const A4_WIDTH: f64 = 595.28;
const A4_HEIGHT: f64 = 841.89;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Parse a color from a "#RRGGBB" hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PdfError::InvalidColor(hex.to_string()));
        }

        let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        Ok(Self::from_rgb(
            parse(&digits[0..2]),
            parse(&digits[2..4]),
            parse(&digits[4..6]),
        ))
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// A single fixed-size PDF page under construction
///
/// Drawing coordinates use a top-left origin (y grows downward); conversion
/// to the PDF bottom-left convention happens when operators are generated.
/// Content accumulates in drawing order in a single content stream.
pub struct PageCanvas {
    /// Page width in points
    width: f64,
    /// Page height in points
    height: f64,
    /// Accumulated content operators
    content: Vec<u8>,
    /// Current font
    font: Font,
    /// Current font size in points
    font_size: f64,
    /// Current text/fill color
    fill_color: Color,
    /// Current stroke color
    stroke_color: Color,
    /// Current stroke line width
    line_width: f64,
}

impl PageCanvas {
    /// Create a blank A4 page (595.28 x 841.89 points)
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            content: Vec::new(),
            font: Font::default(),
            font_size: 10.0,
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
        }
    }

    /// Page width in points
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height in points
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the current font and size
    pub fn set_font(&mut self, font: Font, size: f64) {
        self.font = font;
        self.font_size = size;
    }

    /// Set the text/fill color
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Set the stroke color
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Set the stroke line width in points
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Measured width of `text` in points at the current font/size
    pub fn text_width(&self, text: &str) -> f64 {
        self.font.text_width(text, self.font_size)
    }

    /// Draw text at a position
    ///
    /// # Arguments
    /// * `text` - Text to draw (empty text is a no-op)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points, measured from the page top
    /// * `align` - Alignment relative to `x`
    pub fn draw_text(&mut self, text: &str, x: f64, y: f64, align: Align) {
        if text.is_empty() {
            return;
        }

        let ctx = TextRenderContext {
            font_name: self.font.resource_name().to_string(),
            font_size: self.font_size,
            text_width: self.text_width(text),
            color: self.fill_color,
        };

        let ops = generate_text_operators(text, x, self.height - y, align, &ctx);
        self.content.extend_from_slice(&ops);
    }

    /// Fill a rectangle; `y` is the top edge measured from the page top
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let ops = generate_fill_rect(x, self.height - y - h, w, h, self.fill_color);
        self.content.extend_from_slice(&ops);
    }

    /// Stroke a rectangle outline; `y` is the top edge from the page top
    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let ops = generate_stroke_rect(
            x,
            self.height - y - h,
            w,
            h,
            self.stroke_color,
            self.line_width,
        );
        self.content.extend_from_slice(&ops);
    }

    /// Fill a rounded rectangle; `y` is the top edge from the page top
    pub fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        let ops = generate_fill_round_rect(x, self.height - y - h, w, h, radius, self.fill_color);
        self.content.extend_from_slice(&ops);
    }

    /// Stroke a rounded rectangle, optionally filling it first
    pub fn stroke_round_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        fill: Option<Color>,
    ) {
        let ops = generate_stroke_round_rect(
            x,
            self.height - y - h,
            w,
            h,
            radius,
            self.stroke_color,
            fill,
            self.line_width,
        );
        self.content.extend_from_slice(&ops);
    }

    /// Draw a straight line between two points (y from the page top)
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let ops = generate_line(
            x1,
            self.height - y1,
            x2,
            self.height - y2,
            self.stroke_color,
            self.line_width,
        );
        self.content.extend_from_slice(&ops);
    }

    /// Font dictionary for one base-14 face
    fn base14_font_dict(font: Font) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        }
    }

    /// Assemble the PDF document and return its bytes
    ///
    /// Builds the catalog/pages/page object tree around the accumulated
    /// content stream. Base-14 fonts need no font programs, only font
    /// dictionaries in the page resources.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();

        let font_dict = dictionary! {
            Font::Helvetica.resource_name() =>
                doc.add_object(Self::base14_font_dict(Font::Helvetica)),
            Font::HelveticaBold.resource_name() =>
                doc.add_object(Self::base14_font_dict(Font::HelveticaBold)),
        };
        let resources = dictionary! {
            "Font" => font_dict,
        };

        let contents_id = doc.add_object(Object::Stream(Stream::new(
            dictionary! {},
            self.content.clone(),
        )));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(self.width as f32),
                Object::Real(self.height as f32),
            ],
            "Resources" => resources,
            "Contents" => contents_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => 1,
                "Kids" => vec![page_id.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }
}
