//! Display normalization for address and label text

/// Separator flavor for pincode spacing
///
/// `Markup` uses a non-breaking space entity so a pincode never wraps
/// across lines in rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingMode {
    /// Regular space, for plain text and PDF output
    Plain,
    /// `&nbsp;` entity, for HTML output
    Markup,
}

impl SpacingMode {
    fn pincode_separator(self) -> &'static str {
        match self {
            SpacingMode::Plain => " ",
            SpacingMode::Markup => "&nbsp;",
        }
    }
}

/// Normalize a line of text for display
///
/// Removes whitespace before commas and full stops so wrapped lines
/// never start with punctuation, then applies Indian pincode spacing
/// ("600018" becomes "600 018").
pub fn normalize_display(text: &str, mode: SpacingMode) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = strip_space_before_punct(text);
    format_pincode(&stripped, mode.pincode_separator())
}

/// Drop whitespace runs that precede ',' or '.'
fn strip_space_before_punct(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ',' || c == '.' {
            while out.ends_with(|p: char| p.is_whitespace()) {
                out.pop();
            }
        }
        out.push(c);
    }
    out
}

/// Rewrite six-digit pincodes as two groups of three joined by `sep`
///
/// A pincode is three digits, optional whitespace, three digits, with
/// no adjacent digit on either side. Longer digit runs are left alone.
fn format_pincode(text: &str, sep: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
        if !prev_is_digit {
            if let Some(consumed) = match_pincode(&chars[i..]) {
                for c in &chars[i..i + 3] {
                    out.push(*c);
                }
                out.push_str(sep);
                for c in &chars[i + consumed - 3..i + consumed] {
                    out.push(*c);
                }
                i += consumed;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Length of a pincode match starting at `chars[0]`, if any
fn match_pincode(chars: &[char]) -> Option<usize> {
    if chars.len() < 6 || !chars[..3].iter().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut j = 3;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }

    if chars.len() < j + 3 || !chars[j..j + 3].iter().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if chars.get(j + 3).is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(j + 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contiguous_pincode_gets_space() {
        assert_eq!(
            normalize_display("CHENNAI - 600018", SpacingMode::Plain),
            "CHENNAI - 600 018"
        );
    }

    #[test]
    fn test_already_spaced_pincode_kept() {
        assert_eq!(
            normalize_display("Chennai - 600 004,", SpacingMode::Plain),
            "Chennai - 600 004,"
        );
    }

    #[test]
    fn test_markup_mode_uses_nbsp() {
        assert_eq!(
            normalize_display("Manapakkam, Chennai - 600125", SpacingMode::Markup),
            "Manapakkam, Chennai - 600&nbsp;125"
        );
        assert_eq!(
            normalize_display("Chennai - 600 004,", SpacingMode::Markup),
            "Chennai - 600&nbsp;004,"
        );
    }

    #[test]
    fn test_space_before_punct_removed() {
        assert_eq!(
            normalize_display("Chennai , Tamilnadu .", SpacingMode::Plain),
            "Chennai, Tamilnadu."
        );
    }

    #[test]
    fn test_longer_digit_runs_untouched() {
        assert_eq!(
            normalize_display("GSTIN 33AAJCR6636B1ZJ", SpacingMode::Plain),
            "GSTIN 33AAJCR6636B1ZJ"
        );
        assert_eq!(
            normalize_display("1234567", SpacingMode::Plain),
            "1234567"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_display("", SpacingMode::Plain), "");
    }
}
