//! Money formatting

/// Format an amount with two decimals and thousands separators
///
/// Grouping is western style ("263,927.69"), matching how the amounts
/// appear on the invoice table and preview.
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }

    let abs = amount.abs();
    let rounded = (abs * 100.0).round() / 100.0;

    let mut int_part = rounded.floor() as i64;
    let mut frac_part = ((rounded - rounded.floor()) * 100.0).round() as i64;
    if frac_part >= 100 {
        int_part += 1;
        frac_part -= 100;
    }

    let sign = if amount < 0.0 && (int_part > 0 || frac_part > 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}{}.{frac_part:02}", format_with_thousands(int_part))
}

/// Insert a comma every three digits from the right
fn format_with_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_amounts() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(5.0), "5.00");
        assert_eq!(format_money(194494.00), "194,494.00");
    }

    #[test]
    fn test_cents_rounding() {
        assert_eq!(format_money(20130.084), "20,130.08");
        assert_eq!(format_money(20130.086), "20,130.09");
        assert_eq!(format_money(263927.69), "263,927.69");
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(format_money(1234567.5), "1,234,567.50");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_money(-42.5), "-42.50");
    }

    #[test]
    fn test_rounding_carries_into_integer() {
        assert_eq!(format_money(999.999), "1,000.00");
    }
}
