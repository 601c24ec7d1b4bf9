//! WASM bindings for rentinv
//!
//! This crate provides a JavaScript-friendly API for:
//! - The passphrase gate
//! - Provider lookup and form defaults
//! - Computing GST breakdowns
//! - Rendering the HTML preview and the PDF
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { AccessGate, InvoiceBuilder, providerNames } from 'rentinv-wasm';
//!
//! await init();
//!
//! const gate = new AccessGate(secret);
//! if (!gate.unlock(enteredCode)) { /* show error */ }
//!
//! const names = providerNames();
//! const builder = InvoiceBuilder.fromRequest({
//!   provider: names[0],
//!   from: "2026-05-01",
//!   to: "2026-05-31",
//! });
//!
//! const amounts = builder.breakdown();
//! preview.srcdoc = builder.previewHtml();
//! download(builder.pdfBytes(), builder.downloadFilename());
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Passphrase gate for the page
#[wasm_bindgen]
pub struct AccessGate {
    inner: invoice::AccessGate,
}

#[wasm_bindgen]
impl AccessGate {
    /// Create a gate guarding the configured secret
    #[wasm_bindgen(constructor)]
    pub fn new(secret: &str) -> AccessGate {
        AccessGate {
            inner: invoice::AccessGate::new(secret),
        }
    }

    /// Try a passphrase
    ///
    /// @param code - Entered code (at most 6 characters)
    /// @returns true once the session is unlocked
    pub fn unlock(&mut self, code: &str) -> bool {
        self.inner.unlock(code)
    }

    #[wasm_bindgen(js_name = isUnlocked)]
    pub fn is_unlocked(&self) -> bool {
        self.inner.is_unlocked()
    }

    /// Maximum accepted passphrase length
    #[wasm_bindgen(js_name = maxCodeLen)]
    pub fn max_code_len() -> usize {
        invoice::AccessGate::MAX_CODE_LEN
    }
}

/// Names of all known providers, in selection order
#[wasm_bindgen(js_name = providerNames)]
pub fn provider_names() -> js_sys::Array {
    invoice::providers()
        .iter()
        .map(|p| JsValue::from_str(&p.name))
        .collect()
}

/// Default rent prefilled for a provider
///
/// @param name - Provider display name
#[wasm_bindgen(js_name = defaultRent)]
pub fn default_rent(name: &str) -> Result<f64, JsValue> {
    invoice::provider_by_name(name)
        .map(|p| p.default_rent)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown provider: {name}")))
}

/// Default fiscal-year invoice number for a from-date
///
/// @param dateIso - Any date in the invoice month, "YYYY-MM-DD"
/// @returns "NN / YYYY-YY"
#[wasm_bindgen(js_name = defaultInvoiceNo)]
pub fn default_invoice_no(date_iso: &str) -> Result<String, JsValue> {
    let date = parse_iso_date("from", date_iso)?;
    let first = date.with_day(1).unwrap_or(date);
    Ok(invoice::default_invoice_no(first))
}

/// Invoice form inputs, as supplied from JavaScript
///
/// Dates are ISO "YYYY-MM-DD" strings. `rent` falls back to the
/// provider default and `invoice_no` to the fiscal-year number.
#[derive(Debug, Deserialize)]
struct InvoiceRequest {
    provider: String,
    from: String,
    to: String,
    #[serde(default)]
    rent: Option<f64>,
    #[serde(default)]
    invoice_no: Option<String>,
}

/// Computed amounts, returned to JavaScript as a plain object
#[derive(Debug, Serialize)]
struct Breakdown {
    rent: f64,
    sgst: f64,
    cgst: f64,
    total: f64,
    amount_words: String,
}

fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid {field} date {value:?}: {e}")))
}

/// One invoice, assembled from form inputs
#[wasm_bindgen]
pub struct InvoiceBuilder {
    inner: invoice::Invoice,
}

#[wasm_bindgen]
impl InvoiceBuilder {
    /// Assemble an invoice from a request object
    ///
    /// @param request - { provider, from, to, rent?, invoice_no? }
    /// @returns InvoiceBuilder instance
    #[wasm_bindgen(js_name = fromRequest)]
    pub fn from_request(request: JsValue) -> Result<InvoiceBuilder, JsValue> {
        let request: InvoiceRequest = serde_wasm_bindgen::from_value(request)?;

        let provider = invoice::provider_by_name(&request.provider)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown provider: {}", request.provider)))?
            .clone();

        let period = invoice::InvoicePeriod {
            from: parse_iso_date("from", &request.from)?,
            to: parse_iso_date("to", &request.to)?,
        };

        let rent = request.rent.unwrap_or(provider.default_rent);
        let inner = invoice::Invoice::prepare(provider, period, rent, request.invoice_no);
        Ok(InvoiceBuilder { inner })
    }

    /// Invoice number as printed in the metadata box
    #[wasm_bindgen(js_name = invoiceNo)]
    pub fn invoice_no(&self) -> String {
        self.inner.identity.number.clone()
    }

    /// Advisory message when the period is reversed, null otherwise
    #[wasm_bindgen(js_name = periodWarning)]
    pub fn period_warning(&self) -> Option<String> {
        self.inner.period.warning()
    }

    /// Rent, SGST, CGST, total, and the amount in words
    ///
    /// @returns { rent, sgst, cgst, total, amount_words }
    pub fn breakdown(&self) -> Result<JsValue, JsValue> {
        let breakdown = Breakdown {
            rent: self.inner.rent,
            sgst: self.inner.sgst,
            cgst: self.inner.cgst,
            total: self.inner.total,
            amount_words: self.inner.amount_words.clone(),
        };
        Ok(serde_wasm_bindgen::to_value(&breakdown)?)
    }

    /// Self-contained HTML preview document
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        invoice::render_preview(&self.inner)
    }

    /// Rendered PDF
    ///
    /// @returns PDF bytes (Uint8Array)
    #[wasm_bindgen(js_name = pdfBytes)]
    pub fn pdf_bytes(&self) -> Result<Vec<u8>, JsValue> {
        invoice::render_pdf(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Suggested filename for the PDF download
    #[wasm_bindgen(js_name = downloadFilename)]
    pub fn download_filename(&self) -> String {
        self.inner.download_filename()
    }
}

/// Amount formatting helpers mirrored for the page chrome
#[wasm_bindgen]
pub struct Amounts;

#[wasm_bindgen]
impl Amounts {
    /// Format an amount with two decimals and thousands separators
    ///
    /// @param amount - Amount in rupees
    /// @returns Formatted string (e.g., "194,494.00")
    #[wasm_bindgen(js_name = formatMoney)]
    pub fn format_money(amount: f64) -> String {
        indic_text::format_money(amount)
    }

    /// Spell a whole rupee amount in the Indian numbering system
    ///
    /// @param n - Amount in whole rupees
    /// @returns Words (e.g., "Two Lakh Sixty Three Thousand")
    #[wasm_bindgen(js_name = rupeesInWords)]
    pub fn rupees_in_words(n: u64) -> String {
        indic_text::rupees_in_words(n)
    }
}
