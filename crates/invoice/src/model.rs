//! Assembled invoice model

use crate::calc::{default_invoice_no, TaxBreakdown};
use crate::party::{recipient, Party, Recipient};
use chrono::{Datelike, NaiveDate};
use indic_text::rupees_in_words;
use serde::{Deserialize, Serialize};

/// The rental period covered by an invoice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoicePeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl InvoicePeriod {
    /// Invoice date, fixed to the first day of the from-month
    pub fn invoice_date(&self) -> NaiveDate {
        // day 1 exists in every month
        self.from.with_day(1).unwrap_or(self.from)
    }

    /// Advisory message for a reversed period
    ///
    /// A reversed period still renders; the caller decides whether to
    /// surface the warning.
    pub fn warning(&self) -> Option<String> {
        if self.to < self.from {
            Some("To Date is earlier than From Date. Please correct it.".to_string())
        } else {
            None
        }
    }
}

/// Invoice number and date as printed in the metadata box
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceIdentity {
    pub number: String,
    pub date: NaiveDate,
}

/// A fully assembled invoice, ready to render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub provider: Party,
    pub recipient: Recipient,
    pub identity: InvoiceIdentity,
    pub period: InvoicePeriod,
    pub rent: f64,
    pub sgst: f64,
    pub cgst: f64,
    pub total: f64,
    /// "<words> Only", from the total rounded to whole rupees
    pub amount_words: String,
}

impl Invoice {
    /// Assemble an invoice from form inputs
    ///
    /// `invoice_no` overrides the generated fiscal-year number when
    /// present; a `None` keeps the "NN / YYYY-YY" default.
    pub fn prepare(
        provider: Party,
        period: InvoicePeriod,
        rent: f64,
        invoice_no: Option<String>,
    ) -> Self {
        let date = period.invoice_date();
        let number = invoice_no.unwrap_or_else(|| default_invoice_no(date));
        let amounts = TaxBreakdown::from_rent(rent);
        let amount_words = format!("{} Only", rupees_in_words(amounts.total_rupees()));

        Self {
            provider,
            recipient: recipient().clone(),
            identity: InvoiceIdentity { number, date },
            period,
            rent: amounts.rent,
            sgst: amounts.sgst,
            cgst: amounts.cgst,
            total: amounts.total,
            amount_words,
        }
    }

    /// Suggested filename for the rendered PDF
    ///
    /// Spaces in the provider name become underscores; the date part is
    /// the invoice month, "TaxInvoice_S.N.PREMA_202605.pdf".
    pub fn download_filename(&self) -> String {
        format!(
            "TaxInvoice_{}_{}.pdf",
            self.provider.name.replace(' ', "_"),
            self.identity.date.format("%Y%m")
        )
    }
}
