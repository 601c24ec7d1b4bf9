//! HTML preview styled to match the PDF
//!
//! The stylesheet is embedded in the produced document so the markup is
//! self-contained and renders identically inside an iframe. Theme
//! colors are injected as CSS custom properties.

use crate::model::Invoice;
use crate::theme::Theme;
use indic_text::{format_money, normalize_display, SpacingMode};

const PREVIEW_CSS: &str = r#"
  body{ margin:0; padding:0; background:#fff; font-family: Arial, sans-serif; }
  .preview-frame{ border:2px solid rgba(47,94,142,0.20); border-radius:16px; overflow:hidden; background:white; }
  .inv-bar{ height:14px; background: linear-gradient(90deg, var(--accent), var(--accent2)); }
  .inv-top{ padding:14px 18px; display:flex; justify-content:space-between; gap:18px; }
  .inv-top-left{ font-size:12px; line-height:1.6; color:#333; }
  .inv-top-right{ text-align:right; min-width:320px; }
  .inv-title{ font-size:22px; font-weight:900; letter-spacing:0.8px; color:var(--accent3); }
  .inv-note{ font-size:11px; color:#666; margin-top:4px; }
  .inv-meta{ margin-top:10px; border:1px solid #d9d9d9; border-radius:10px; overflow:hidden; }
  .inv-meta-row{ display:flex; justify-content:space-between; padding:10px 12px; border-top:1px solid #e6e6e6; font-size:12px; background:#fbfdff; }
  .inv-meta-row:first-child{ border-top:none; }
  .inv-meta-row b{ color:#2a3b57; }
  .inv-body{ padding:14px 18px 18px 18px; }
  .section{ margin-top:12px; }
  .section-title{ font-size:12px; font-weight:900; color:var(--accent3); margin-bottom:8px; }
  .lines{ font-size:12px; line-height:1.6; color:#333; }
  .hr{ height:1px; background:#ededed; margin:14px 0; }
  .kv-grid{ display:grid; grid-template-columns: 240px 14px 1fr; row-gap:8px; font-size:12px; line-height:1.5; }
  .kv-grid .c{ text-align:center; color:#666; }
  .table{ margin-top:14px; border:1px solid #d9d9d9; border-radius:10px; overflow:hidden; }
  .thead{ display:flex; justify-content:space-between; background: linear-gradient(90deg, var(--accent), var(--accent2)); color:white; font-weight:900; font-size:12px; }
  .thead div{ padding:10px 12px; }
  .trow{ display:flex; justify-content:space-between; gap:12px; border-top:1px solid #eee; font-size:12px; }
  .trow:nth-child(odd){ background:#f7faff; }
  .trow div{ padding:10px 12px; }
  .wdesc{ flex:1 1 auto; }
  .wamt{ width:180px; text-align:right; white-space:nowrap; }
  .rightlabel{ text-align:right; padding-right:30px; font-weight:700; color:#2a3b57; }
  .totalrow{ background:var(--highlight); font-weight:900; }
  .amountwords{ margin-top:12px; font-size:12px; line-height:1.6; }
  .signature{ margin-top:26px; display:flex; justify-content:flex-end; }
  .sigbox{ width:300px; font-size:12px; line-height:1.8; }
  .sigbox b{ color:#2a3b57; }
"#;

/// Escape text for embedding in HTML
fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape then normalize a value for display, non-breaking pincodes
fn display_html(text: &str) -> String {
    normalize_display(&html_escape(text), SpacingMode::Markup)
}

/// Provider address markup, with per-provider readability tweaks
fn provider_address_html(invoice: &Invoice) -> String {
    let mut address = display_html(&invoice.provider.address);
    if invoice.provider.name == "S.N.Geetha" {
        // Keep the society name unbreakable and start the city on its
        // own line so the pincode never wraps mid-phrase.
        address = address.replace(
            "River View Housing Society",
            "River&nbsp;View&nbsp;Housing&nbsp;Society",
        );
        address = address.replace(", Chennai", ",<br>Chennai");
    }
    address
}

fn kv_row(label: &str, value: &str, bold_value: bool) -> String {
    let value = if bold_value {
        format!("<b>{value}</b>")
    } else {
        value.to_string()
    };
    format!("<div><b>{label}</b></div><div class=\"c\">:</div><div>{value}</div>\n")
}

/// Render an invoice to a self-contained HTML document
pub fn render_preview(invoice: &Invoice) -> String {
    let theme = Theme::for_party(&invoice.provider.name);
    let root_vars = format!(
        ":root{{ --accent:{}; --accent2:{}; --accent3:{}; --highlight:{}; }}",
        theme.accent, theme.accent2, theme.heading, theme.highlight
    );

    let provider = &invoice.provider;
    let recipient = &invoice.recipient;

    let recipient_lines = recipient
        .address_lines
        .iter()
        .map(|l| display_html(l))
        .collect::<Vec<_>>()
        .join("<br>\n        ");

    let mut kv_rows = String::new();
    kv_rows.push_str(&kv_row(
        "Pan Number of Service Provider",
        &html_escape(&provider.pan),
        true,
    ));
    kv_rows.push_str(&kv_row(
        "GST Registration Number of service provider",
        &html_escape(&provider.gst),
        true,
    ));
    kv_rows.push_str(&kv_row(
        "Service Accounting Code (SAC)",
        &html_escape(&provider.sac),
        false,
    ));
    kv_rows.push_str(&kv_row(
        "Description of Service Accounting Code (SAC)",
        &html_escape(&provider.description),
        false,
    ));
    kv_rows.push_str(&kv_row(
        "Location of service provided",
        &html_escape(&provider.location),
        false,
    ));
    kv_rows.push_str(&kv_row(
        "State code of service location",
        &html_escape(&provider.state_code),
        false,
    ));
    kv_rows.push_str(&kv_row(
        "State name of service location",
        &html_escape(&provider.state_name),
        false,
    ));

    format!(
        r#"<!doctype html>
<html>
<head><style>
  {root_vars}
{css}</style></head>
<body>
<div class="preview-frame">
  <div class="inv-bar"></div>

  <div class="inv-top">
    <div class="inv-top-left">
      <div><b>Name: {provider_name}</b></div>
      <div>{provider_address}</div>
    </div>

    <div class="inv-top-right">
      <div class="inv-title">TAX INVOICE</div>
      <div class="inv-note">Original for Recipient</div>
      <div class="inv-meta">
        <div class="inv-meta-row"><b>Invoice No.</b><span>{invoice_no}</span></div>
        <div class="inv-meta-row"><b>Date</b><span>{invoice_date}</span></div>
      </div>
    </div>
  </div>

  <div class="inv-body">
    <div class="section">
      <div class="section-title">Name &amp; Address of service recipient</div>
      <div class="lines"><b>{recipient_name}</b><br>
        {recipient_lines}
      </div>
      <div class="lines" style="margin-top:10px;"><b>GSTIN of recipient :</b> <b>{recipient_gstin}</b></div>
    </div>

    <div class="hr"></div>

    <div class="section">
      <div class="kv-grid">
{kv_rows}      </div>
    </div>

    <div class="table">
      <div class="thead"><div>Particulars</div><div>Amt Rs</div></div>

      <div class="trow">
        <div class="wdesc">RENT FOR THE PERIOD {from_date} TO {to_date}</div>
        <div class="wamt">{rent}</div>
      </div>
      <div class="trow">
        <div class="wdesc rightlabel">SGST @ 9%</div>
        <div class="wamt">{sgst}</div>
      </div>
      <div class="trow">
        <div class="wdesc rightlabel">CGST @ 9%</div>
        <div class="wamt">{cgst}</div>
      </div>
      <div class="trow totalrow">
        <div class="wdesc">Total</div>
        <div class="wamt">{total}</div>
      </div>
    </div>

    <div class="amountwords"><b>Amount in words:</b> {amount_words}</div>

    <div class="signature">
      <div class="sigbox">
        <div><b>Signature:</b></div>
        <div style="margin-top:18px;"><b>Name :</b> Name</div>
        <div><b>Authorised Signatory</b></div>
      </div>
    </div>
  </div>

  <div class="inv-bar"></div>
</div>
</body>
</html>
"#,
        root_vars = root_vars,
        css = PREVIEW_CSS,
        provider_name = html_escape(&provider.name),
        provider_address = provider_address_html(invoice),
        invoice_no = html_escape(&invoice.identity.number),
        invoice_date = invoice.identity.date.format("%d/%m/%Y"),
        recipient_name = html_escape(&recipient.name),
        recipient_lines = recipient_lines,
        recipient_gstin = html_escape(&recipient.gstin),
        kv_rows = kv_rows,
        from_date = invoice.period.from.format("%d/%m/%Y"),
        to_date = invoice.period.to.format("%d/%m/%Y"),
        rent = format_money(invoice.rent),
        sgst = format_money(invoice.sgst),
        cgst = format_money(invoice.cgst),
        total = format_money(invoice.total),
        amount_words = html_escape(&invoice.amount_words),
    )
}
