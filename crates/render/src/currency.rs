//! US-dollar display formatting.

/// Format integer cents as a US-locale currency string, e.g. `"$1,730.00"`.
///
/// Thousands are grouped with commas and the fraction always shows two
/// digits, matching what statement recipients expect on printed invoices.
pub fn usd(cents: u64) -> String {
    let dollars = cents / 100;
    let fraction = cents % 100;
    format!("${}.{fraction:02}", group_thousands(dollars))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts_without_grouping() {
        assert_eq!(usd(0), "$0.00");
        assert_eq!(usd(5), "$0.05");
        assert_eq!(usd(36_000), "$360.00");
        assert_eq!(usd(65_000), "$650.00");
    }

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(usd(173_000), "$1,730.00");
        assert_eq!(usd(100_000_00), "$100,000.00");
        assert_eq!(usd(123_456_789), "$1,234,567.89");
    }
}
