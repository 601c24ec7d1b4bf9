//! Render a sample invoice for each provider
//!
//! Writes one PDF and one HTML preview per provider under output/.
//!
//! Run with: cargo run --example render_sample -p invoice

use anyhow::Result;
use chrono::NaiveDate;
use invoice::{providers, render_pdf, render_preview, Invoice, InvoicePeriod};

fn main() -> Result<()> {
    std::fs::create_dir_all("output")?;

    let period = InvoicePeriod {
        from: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
        to: NaiveDate::from_ymd_opt(2026, 5, 31).expect("valid date"),
    };

    for provider in providers() {
        let rent = provider.default_rent;
        let invoice = Invoice::prepare(provider.clone(), period, rent, None);

        let pdf = render_pdf(&invoice)?;
        let pdf_path = format!("output/{}", invoice.download_filename());
        std::fs::write(&pdf_path, &pdf)?;

        let html = render_preview(&invoice);
        let html_path = pdf_path.replace(".pdf", ".html");
        std::fs::write(&html_path, html)?;

        println!(
            "{}: {} (total Rs {})",
            provider.name,
            pdf_path,
            invoice.total
        );
    }

    Ok(())
}
