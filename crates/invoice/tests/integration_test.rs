use chrono::NaiveDate;
use invoice::{provider_by_name, render_pdf, render_preview, Invoice, InvoicePeriod};
use pretty_assertions::assert_eq;

fn may_2026() -> InvoicePeriod {
    InvoicePeriod {
        from: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        to: NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
    }
}

#[test]
fn test_full_invoice_flow() {
    let provider = provider_by_name("S.N.PREMA").unwrap().clone();
    let invoice = Invoice::prepare(provider, may_2026(), 223667.53, None);

    assert_eq!(invoice.identity.number, "02 / 2026-27");
    assert_eq!(invoice.identity.date, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
    assert_eq!(invoice.sgst, 20130.08);
    assert_eq!(invoice.cgst, 20130.08);
    assert_eq!(invoice.total, 263927.69);
    assert_eq!(
        invoice.amount_words,
        "Two Lakh Sixty Three Thousand Nine Hundred Twenty Eight Only"
    );
    assert_eq!(invoice.download_filename(), "TaxInvoice_S.N.PREMA_202605.pdf");

    let pdf = render_pdf(&invoice).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    let text = String::from_utf8_lossy(&content);
    assert!(text.contains("(Name: S.N.PREMA) Tj"));
    assert!(text.contains("(33BXNPP2277D1ZD) Tj"));
    assert!(text.contains("(33AAJCR6636B1ZJ) Tj"));
    assert!(text.contains("(20,130.08) Tj"));
    assert!(text.contains("(263,927.69) Tj"));
}

#[test]
fn test_every_provider_renders_both_outputs() {
    for provider in invoice::providers() {
        let rent = provider.default_rent;
        let invoice = Invoice::prepare(provider.clone(), may_2026(), rent, None);

        let pdf = render_pdf(&invoice).unwrap();
        assert!(lopdf::Document::load_mem(&pdf).is_ok(), "{}", provider.name);

        let html = render_preview(&invoice);
        assert!(html.contains(&format!("Name: {}", provider.name)));
    }
}

#[test]
fn test_preview_and_pdf_share_amounts() {
    let provider = provider_by_name("N.RAJENDRAN").unwrap().clone();
    let invoice = Invoice::prepare(provider, may_2026(), 129662.00, None);

    let html = render_preview(&invoice);
    let pdf = render_pdf(&invoice).unwrap();
    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let text = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).to_string();

    // 129,662.00 rent, 11,669.58 each GST component, 153,001.16 total
    for amount in ["129,662.00", "11,669.58", "153,001.16"] {
        assert!(html.contains(amount), "preview missing {amount}");
        assert!(text.contains(amount), "pdf missing {amount}");
    }
}

#[test]
fn test_reversed_period_still_renders_with_warning() {
    let provider = provider_by_name("S.N.Geetha").unwrap().clone();
    let period = InvoicePeriod {
        from: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        to: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
    };
    assert!(period.warning().is_some());

    let invoice = Invoice::prepare(provider, period, 194494.00, None);
    assert!(render_pdf(&invoice).is_ok());
}
