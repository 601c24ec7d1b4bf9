//! Amounts in words, Indian numbering system

/// English names for 0-19
const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// English names for the tens places
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell a whole rupee amount in the Indian numbering system
///
/// Groups run Crore (10^7), Lakh (10^5), Thousand, Hundred, then the
/// final two digits. Crore counts above 99 recurse, so arbitrarily
/// large amounts read naturally ("One Crore Crore" never appears).
/// No "and" is inserted between groups.
pub fn rupees_in_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    let crore = n / 10_000_000;
    if crore > 0 {
        parts.push(format!("{} Crore", rupees_in_words(crore)));
    }

    let lakh = (n / 100_000) % 100;
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digits(lakh)));
    }

    let thousand = (n / 1_000) % 100;
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digits(thousand)));
    }

    let hundred = (n / 100) % 10;
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }

    let last = n % 100;
    if last > 0 {
        parts.push(two_digits(last));
    }

    parts.join(" ")
}

/// Spell a value below 100
fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10) as usize];
        let unit = (n % 10) as usize;
        if unit == 0 {
            tens.to_string()
        } else {
            format!("{} {}", tens, ONES[unit])
        }
    }
}
