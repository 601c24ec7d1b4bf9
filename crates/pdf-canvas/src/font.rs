//! Base-14 font handling and metrics

/// Glyph advance widths for Helvetica, chars 0x20..=0x7E, in 1/1000 em
/// (Adobe AFM metrics).
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0x30-0x39
    278, 278, 584, 584, 584, 556, 1015, // 0x3A-0x40
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667,
    611, 722, 667, 944, 667, 667, 611, // 0x41-0x5A
    278, 278, 278, 469, 556, 333, // 0x5B-0x60
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, // 0x61-0x7A
    334, 260, 334, 584, // 0x7B-0x7E
];

/// Glyph advance widths for Helvetica-Bold, chars 0x20..=0x7E, in 1/1000 em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0x30-0x39
    333, 333, 584, 584, 584, 611, 975, // 0x3A-0x40
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722, 667,
    611, 722, 667, 944, 667, 667, 611, // 0x41-0x5A
    333, 278, 333, 584, 556, 333, // 0x5B-0x60
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, // 0x61-0x7A
    389, 280, 389, 584, // 0x7B-0x7E
];

/// Advance width used for characters outside the metrics table.
const DEFAULT_WIDTH: u16 = 556;

/// One of the base-14 faces used on the invoice page.
///
/// Base-14 fonts are resolved by every PDF viewer, so no font program is
/// embedded; widths come from the Adobe AFM tables above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// PostScript BaseFont name for the font dictionary
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Page resource name ("F1", "F2")
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Glyph advance width for a character, in 1/1000 em
    pub fn char_advance(&self, c: char) -> u16 {
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            self.widths()[(code - 0x20) as usize]
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Text width in 1/1000 em units
    pub fn text_advance(&self, text: &str) -> u32 {
        text.chars().map(|c| self.char_advance(c) as u32).sum()
    }

    /// Text width in points for a given font size
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self.text_advance(text) as f64 / 1000.0 * font_size
    }
}
