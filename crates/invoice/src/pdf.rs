//! Fixed single-page PDF layout
//!
//! Positions are absolute page coordinates measured from the top-left,
//! derived from fixed margins and measured text widths. The body flows
//! top-down through a single cursor; the signature block is anchored
//! from the page bottom in a separate pass so it lands in the same
//! place regardless of how much text preceded it.

use crate::model::Invoice;
use crate::theme::Theme;
use crate::Result;
use indic_text::{format_money, normalize_display, SpacingMode};
use pdf_canvas::{wrap_text, Align, Color, Font, PageCanvas};

const MARGIN: f64 = 24.0;
const BAR_H: f64 = 14.0;

const BODY_SIZE: f64 = 10.0;
const BODY_LINE: f64 = 14.0;

/// Colors resolved from the theme once per render
struct Ink {
    accent: Color,
    heading: Color,
    highlight: Color,
    border: Color,
    soft_line: Color,
    body: Color,
    note: Color,
    signature_line: Color,
}

impl Ink {
    fn from_theme(theme: &Theme) -> Result<Self> {
        Ok(Self {
            accent: Color::from_hex(theme.accent)?,
            heading: Color::from_hex(theme.heading)?,
            highlight: Color::from_hex(theme.highlight)?,
            border: Color::from_hex(Theme::BORDER)?,
            soft_line: Color::from_hex(Theme::SOFT_LINE)?,
            body: Color::from_hex(Theme::BODY_TEXT)?,
            note: Color::from_hex(Theme::NOTE)?,
            signature_line: Color::from_hex(Theme::SIGNATURE_LINE)?,
        })
    }
}

/// Render an invoice to PDF bytes
pub fn render_pdf(invoice: &Invoice) -> Result<Vec<u8>> {
    let theme = Theme::for_party(&invoice.provider.name);
    let ink = Ink::from_theme(&theme)?;

    let mut page = PageCanvas::a4();
    let (w, h) = (page.width(), page.height());
    let (left, right) = (MARGIN, w - MARGIN);

    draw_frame(&mut page, &ink, w, h);
    draw_header(&mut page, &ink, invoice, w);

    let mut y = draw_provider_block(&mut page, &ink, invoice);

    // Divider under the header block
    y += 10.0;
    draw_divider(&mut page, &ink, left, right, y);
    y += 22.0;

    y = draw_recipient_block(&mut page, &ink, invoice, y);
    y += 18.0;
    draw_divider(&mut page, &ink, left, right, y);
    y += 18.0;

    y = draw_provider_details(&mut page, &ink, invoice, y);
    y += 8.0;

    y = draw_amount_table(&mut page, &ink, invoice, y);
    y += 18.0;

    // Amount in words, wrapped to the table width
    let table_w = right - 18.0 - (left + 18.0);
    page.set_fill_color(ink.body);
    page.set_font(Font::Helvetica, BODY_SIZE);
    let words_line = format!("Amount in words: {}", invoice.amount_words);
    for line in wrap_text(&words_line, Font::Helvetica, BODY_SIZE, table_w) {
        page.draw_text(&line, left + 18.0, y, Align::Left);
        y += 13.0;
    }

    draw_signature(&mut page, &ink, w, h);

    Ok(page.to_bytes()?)
}

fn draw_divider(page: &mut PageCanvas, ink: &Ink, left: f64, right: f64, y: f64) {
    page.set_stroke_color(ink.soft_line);
    page.set_line_width(1.1);
    page.line(left + 14.0, y, right - 14.0, y);
}

/// Outer border and the top/bottom accent bars
fn draw_frame(page: &mut PageCanvas, ink: &Ink, w: f64, h: f64) {
    page.set_stroke_color(ink.border);
    page.set_line_width(1.2);
    page.stroke_rect(MARGIN, MARGIN, w - 2.0 * MARGIN, h - 2.0 * MARGIN);

    page.set_fill_color(ink.accent);
    page.fill_rect(MARGIN, MARGIN, w - 2.0 * MARGIN, BAR_H);
    page.fill_rect(MARGIN, h - MARGIN - BAR_H, w - 2.0 * MARGIN, BAR_H);
}

/// Title, recipient-copy note, and the invoice number/date box
fn draw_header(page: &mut PageCanvas, ink: &Ink, invoice: &Invoice, w: f64) {
    page.set_fill_color(ink.heading);
    page.set_font(Font::HelveticaBold, 20.0);
    page.draw_text("TAX INVOICE", w / 2.0, 60.0, Align::Center);

    page.set_fill_color(ink.note);
    page.set_font(Font::Helvetica, BODY_SIZE);
    page.draw_text("Original for Recipient", w - MARGIN - 18.0, 58.0, Align::Right);

    let meta_w = 300.0;
    let meta_x = w - MARGIN - 18.0 - meta_w;
    page.set_stroke_color(ink.border);
    page.set_line_width(1.2);
    page.stroke_round_rect(meta_x, 82.0, meta_w, 56.0, 10.0, Some(Color::white()));

    page.set_fill_color(ink.body);
    page.set_font(Font::HelveticaBold, BODY_SIZE);
    page.draw_text(
        &format!("Invoice No.   {}", invoice.identity.number),
        meta_x + 14.0,
        104.0,
        Align::Left,
    );
    page.draw_text(
        &format!("Date: {}", invoice.identity.date.format("%d/%m/%Y")),
        meta_x + 14.0,
        122.0,
        Align::Left,
    );
}

/// Provider name and wrapped address in the header's left column
///
/// Returns the cursor position below the block.
fn draw_provider_block(page: &mut PageCanvas, ink: &Ink, invoice: &Invoice) -> f64 {
    let x = MARGIN + 18.0;
    let meta_x = page.width() - MARGIN - 18.0 - 300.0;
    let max_w = (meta_x - 24.0) - x;

    page.set_fill_color(ink.body);
    page.set_font(Font::HelveticaBold, 12.0);
    page.draw_text(&format!("Name: {}", invoice.provider.name), x, 105.0, Align::Left);

    let mut y = 125.0;
    let address = normalize_display(&invoice.provider.address, SpacingMode::Plain);
    page.set_font(Font::Helvetica, BODY_SIZE);
    for line in wrap_text(&address, Font::Helvetica, BODY_SIZE, max_w) {
        page.draw_text(&line, x, y, Align::Left);
        y += 16.0;
    }

    y + 8.0
}

/// Recipient name, address lines, and GSTIN
fn draw_recipient_block(page: &mut PageCanvas, ink: &Ink, invoice: &Invoice, mut y: f64) -> f64 {
    let x = MARGIN + 18.0;

    page.set_fill_color(ink.body);
    page.set_font(Font::HelveticaBold, BODY_SIZE);
    page.draw_text(&invoice.recipient.name, x, y, Align::Left);
    y += 16.0;

    page.set_font(Font::Helvetica, BODY_SIZE);
    for line in &invoice.recipient.address_lines {
        let line = normalize_display(line, SpacingMode::Plain);
        page.draw_text(&line, x, y, Align::Left);
        y += 15.0;
    }
    y += 8.0;

    page.draw_text("GSTIN of recipient :", x, y, Align::Left);
    page.set_font(Font::HelveticaBold, BODY_SIZE);
    page.draw_text(&invoice.recipient.gstin, MARGIN + 170.0, y, Align::Left);

    y
}

/// The label/colon/value detail grid (PAN, GST, SAC, location, state)
fn draw_provider_details(page: &mut PageCanvas, ink: &Ink, invoice: &Invoice, mut y: f64) -> f64 {
    let label_x = MARGIN + 18.0;
    let colon_x = MARGIN + 310.0;
    let value_x = MARGIN + 325.0;
    let max_val_w = page.width() - MARGIN - 18.0 - value_x;

    let bold_row = |page: &mut PageCanvas, y: f64, label: &str, value: &str| {
        page.set_fill_color(ink.body);
        page.set_font(Font::Helvetica, BODY_SIZE);
        page.draw_text(label, label_x, y, Align::Left);
        page.set_fill_color(ink.note);
        page.draw_text(":", colon_x, y, Align::Left);
        page.set_fill_color(ink.body);
        page.set_font(Font::HelveticaBold, BODY_SIZE);
        page.draw_text(value, value_x, y, Align::Left);
    };

    bold_row(page, y, "Pan Number of Service Provider", &invoice.provider.pan);
    y += 18.0;
    bold_row(
        page,
        y,
        "GST Registration Number of service provider",
        &invoice.provider.gst,
    );
    y += 18.0;

    let kv = |page: &mut PageCanvas, y: &mut f64, label: &str, value: &str, extra: f64| {
        page.set_fill_color(ink.body);
        page.set_font(Font::Helvetica, BODY_SIZE);
        page.draw_text(label, label_x, *y, Align::Left);
        page.set_fill_color(ink.note);
        page.draw_text(":", colon_x, *y, Align::Left);
        page.set_fill_color(ink.body);
        for line in wrap_text(value, Font::Helvetica, BODY_SIZE, max_val_w) {
            page.draw_text(&line, value_x, *y, Align::Left);
            *y += BODY_LINE;
        }
        *y += extra;
    };

    kv(page, &mut y, "Service Accounting Code (SAC)", &invoice.provider.sac, 8.0);
    kv(
        page,
        &mut y,
        "Description of Service Accounting Code (SAC)",
        &invoice.provider.description,
        16.0,
    );
    kv(
        page,
        &mut y,
        "Location of service provided",
        &invoice.provider.location,
        10.0,
    );
    kv(
        page,
        &mut y,
        "State code of service location",
        &invoice.provider.state_code,
        10.0,
    );
    kv(
        page,
        &mut y,
        "State name of service location",
        &invoice.provider.state_name,
        12.0,
    );

    y
}

/// Four-row amount table: rent for the period, SGST, CGST, total
///
/// Returns the cursor position below the table.
fn draw_amount_table(page: &mut PageCanvas, ink: &Ink, invoice: &Invoice, y: f64) -> f64 {
    let x = MARGIN + 18.0;
    let table_w = page.width() - MARGIN - 18.0 - x;
    let header_h = 30.0;
    let row_h = 30.0;
    let table_h = header_h + 4.0 * row_h;

    page.set_stroke_color(ink.border);
    page.set_line_width(1.2);
    page.stroke_round_rect(x, y, table_w, table_h, 10.0, None);

    page.set_fill_color(ink.accent);
    page.fill_round_rect(x, y, table_w, header_h, 10.0);
    page.set_fill_color(Color::white());
    page.set_font(Font::HelveticaBold, BODY_SIZE);
    page.draw_text("Particulars", x + 12.0, y + 20.0, Align::Left);
    page.draw_text("Amt Rs", x + table_w - 12.0, y + 20.0, Align::Right);

    page.set_fill_color(ink.body);
    page.set_font(Font::Helvetica, BODY_SIZE);

    let rent_desc = format!(
        "RENT FOR THE PERIOD {} TO {}",
        invoice.period.from.format("%d/%m/%Y"),
        invoice.period.to.format("%d/%m/%Y")
    );
    let amount_x = x + table_w - 12.0;
    page.draw_text(&rent_desc, x + 12.0, y + header_h + 20.0, Align::Left);
    page.draw_text(&format_money(invoice.rent), amount_x, y + header_h + 20.0, Align::Right);

    let sgst_y = y + header_h + row_h + 20.0;
    page.draw_text("SGST @ 9%", x + table_w - 80.0, sgst_y, Align::Right);
    page.draw_text(&format_money(invoice.sgst), amount_x, sgst_y, Align::Right);

    let cgst_y = y + header_h + 2.0 * row_h + 20.0;
    page.draw_text("CGST @ 9%", x + table_w - 80.0, cgst_y, Align::Right);
    page.draw_text(&format_money(invoice.cgst), amount_x, cgst_y, Align::Right);

    let total_top = y + header_h + 3.0 * row_h;
    page.set_fill_color(ink.highlight);
    page.fill_rect(x, total_top, table_w, row_h);
    page.set_fill_color(ink.body);
    page.set_font(Font::HelveticaBold, BODY_SIZE);
    page.draw_text("Total", x + 12.0, total_top + 20.0, Align::Left);
    page.draw_text(&format_money(invoice.total), amount_x, total_top + 20.0, Align::Right);

    y + table_h
}

/// Signature block, anchored a fixed distance above the bottom bar
fn draw_signature(page: &mut PageCanvas, ink: &Ink, w: f64, h: f64) {
    let sig_w = 260.0;
    let sig_x = w - MARGIN - 18.0 - sig_w;

    page.set_fill_color(ink.body);
    page.set_font(Font::HelveticaBold, BODY_SIZE);
    page.draw_text("Signature:", sig_x, h - 124.0, Align::Left);

    page.set_stroke_color(ink.signature_line);
    page.line(sig_x, h - 108.0, sig_x + 200.0, h - 108.0);

    page.draw_text("Name :", sig_x, h - 86.0, Align::Left);
    page.set_font(Font::HelveticaBold, 9.0);
    page.draw_text("Authorised Signatory", sig_x + 90.0, h - 68.0, Align::Left);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoicePeriod;
    use crate::party::provider_by_name;
    use chrono::NaiveDate;

    fn sample_invoice() -> Invoice {
        let provider = provider_by_name("S.N.PREMA").unwrap().clone();
        Invoice::prepare(
            provider,
            InvoicePeriod {
                from: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
            },
            223667.53,
            None,
        )
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_invoice()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_content_carries_invoice_fields() {
        let bytes = render_pdf(&sample_invoice()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        let text = String::from_utf8_lossy(&content);

        assert!(text.contains("(TAX INVOICE) Tj"));
        assert!(text.contains("(Invoice No.   02 / 2026-27) Tj"));
        assert!(text.contains("(Date: 01/05/2026) Tj"));
        assert!(text.contains("(RENT FOR THE PERIOD 01/05/2026 TO 31/05/2026) Tj"));
        assert!(text.contains("(263,927.69) Tj"));
        assert!(text.contains("(Authorised Signatory) Tj"));
    }

    #[test]
    fn test_address_pincode_spaced_in_pdf() {
        let bytes = render_pdf(&sample_invoice()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        let text = String::from_utf8_lossy(&content);

        assert!(text.contains("600 018"));
        assert!(!text.contains("600018"));
    }
}
