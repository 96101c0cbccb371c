/// Currency code used across the product
pub const CURRENCY: &str = "NGN";

/// Format an amount as `NGN 1,234.56`
pub fn format_amount(amount: f64) -> String {
    format!("{} {}", CURRENCY, group_thousands(amount))
}

/// Format an amount with an explicit sign, `+` for credits and `-` for debits
pub fn format_signed(amount: f64, credit: bool) -> String {
    let sign = if credit { '+' } else { '-' };
    format!("{}{} {}", sign, CURRENCY, group_thousands(amount.abs()))
}

/// Two decimal places with thousands separators
fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_amount(5.0), "NGN 5.00");
        assert_eq!(format_amount(999.99), "NGN 999.99");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_amount(1234.5), "NGN 1,234.50");
        assert_eq!(format_amount(1_000_000.0), "NGN 1,000,000.00");
    }

    #[test]
    fn test_signed_formatting() {
        assert_eq!(format_signed(50.0, true), "+NGN 50.00");
        assert_eq!(format_signed(50.0, false), "-NGN 50.00");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(format_amount(-1234.56), "NGN -1,234.56");
    }
}
