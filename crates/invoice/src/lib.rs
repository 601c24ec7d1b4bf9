//! Invoice - rent tax invoice model and rendering
//!
//! This crate provides:
//! - The provider/recipient registry and per-provider color themes
//! - Fiscal-year invoice numbering and GST amount computation
//! - PDF rendering (fixed single-page layout)
//! - HTML preview rendering styled to match the PDF
//! - A passphrase gate for the interactive surface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use invoice::{providers, Invoice, InvoicePeriod};
//!
//! let provider = providers().iter().find(|p| p.name == "S.N.PREMA").unwrap();
//! let period = InvoicePeriod {
//!     from: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
//!     to: NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
//! };
//! let invoice = Invoice::prepare(provider.clone(), period, 223667.53, None);
//!
//! assert_eq!(invoice.identity.number, "02 / 2026-27");
//! let pdf = invoice::render_pdf(&invoice).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod calc;
mod gate;
mod model;
mod party;
mod pdf;
mod preview;
mod theme;

pub use calc::{default_invoice_no, invoice_seq_and_fy, round2, TaxBreakdown};
pub use gate::AccessGate;
pub use model::{Invoice, InvoiceIdentity, InvoicePeriod};
pub use party::{provider_by_name, providers, recipient, Party, Recipient};
pub use pdf::render_pdf;
pub use preview::render_preview;
pub use theme::Theme;

use thiserror::Error;

/// Errors that can occur while producing an invoice document
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Document error: {0}")]
    DocumentError(#[from] pdf_canvas::PdfError),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
