//! Fiscal-year numbering and GST computation

use chrono::{Datelike, NaiveDate};

/// Round to two decimal places, half away from zero
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sequence number and fiscal-year label for an invoice date
///
/// The Indian fiscal year runs April through March, so April is
/// sequence 1 and March sequence 12. The label shows the start year in
/// full and the end year as two digits ("2026-27").
pub fn invoice_seq_and_fy(date: NaiveDate) -> (u32, String) {
    let (year, month) = (date.year(), date.month());
    let fy_start = if month >= 4 { year } else { year - 1 };
    let fy_label = format!("{}-{:02}", fy_start, (fy_start + 1).rem_euclid(100));
    let seq = if month >= 4 { month - 3 } else { month + 9 };
    (seq, fy_label)
}

/// Default invoice number, "NN / YYYY-YY"
pub fn default_invoice_no(date: NaiveDate) -> String {
    let (seq, fy_label) = invoice_seq_and_fy(date);
    format!("{seq:02} / {fy_label}")
}

/// GST amounts derived from a rent figure
///
/// SGST and CGST are each 9% of the rent, rounded independently to two
/// decimals before summing. The total can therefore differ by a paisa
/// from rounding 18% of the rent in one step; the component-wise figures
/// are the ones that appear on the invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    pub rent: f64,
    pub sgst: f64,
    pub cgst: f64,
    pub total: f64,
}

impl TaxBreakdown {
    pub fn from_rent(rent: f64) -> Self {
        let sgst = round2(rent * 0.09);
        let cgst = round2(rent * 0.09);
        let total = round2(rent + sgst + cgst);
        Self {
            rent,
            sgst,
            cgst,
            total,
        }
    }

    /// Total rounded to the nearest whole rupee, for the words line
    pub fn total_rupees(&self) -> u64 {
        self.total.round().max(0.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fiscal_year_starts_in_april() {
        assert_eq!(invoice_seq_and_fy(date(2026, 4, 1)), (1, "2026-27".into()));
        assert_eq!(invoice_seq_and_fy(date(2026, 5, 1)), (2, "2026-27".into()));
        assert_eq!(invoice_seq_and_fy(date(2027, 3, 1)), (12, "2026-27".into()));
    }

    #[test]
    fn test_months_before_april_belong_to_prior_year() {
        assert_eq!(invoice_seq_and_fy(date(2026, 1, 15)), (10, "2025-26".into()));
        assert_eq!(invoice_seq_and_fy(date(2026, 2, 1)), (11, "2025-26".into()));
    }

    #[test]
    fn test_century_rollover_label() {
        assert_eq!(invoice_seq_and_fy(date(2099, 6, 1)), (3, "2099-00".into()));
    }

    #[test]
    fn test_default_invoice_no_zero_pads() {
        assert_eq!(default_invoice_no(date(2026, 5, 1)), "02 / 2026-27");
        assert_eq!(default_invoice_no(date(2026, 12, 1)), "09 / 2026-27");
    }

    #[test]
    fn test_breakdown_rounds_each_component() {
        let b = TaxBreakdown::from_rent(223667.53);
        assert_eq!(b.sgst, 20130.08);
        assert_eq!(b.cgst, 20130.08);
        assert_eq!(b.total, 263927.69);
        assert_eq!(b.total_rupees(), 263928);
    }

    #[test]
    fn test_componentwise_rounding_can_differ_from_single_step() {
        let b = TaxBreakdown::from_rent(100.30);
        assert_eq!(b.sgst, 9.03);
        assert_eq!(b.total, 118.36);
        assert_ne!(b.total, round2(100.30 * 1.18));
    }

    #[test]
    fn test_default_rents() {
        let b = TaxBreakdown::from_rent(194494.00);
        assert_eq!(b.sgst, 17504.46);
        assert_eq!(b.total, 229502.92);
    }
}
