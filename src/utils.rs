// Utility functions

/// Trims and uppercases a user-supplied ticker symbol.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Formats a non-negative value as an integer with thousands separators.
pub fn group_digits(value: f64) -> String {
    let whole = value.round().max(0.0) as u64;
    let digits = whole.to_string();
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
    fn normalizes_symbol_input() {
        assert_eq!(normalize_symbol("  aapl "), "AAPL");
        assert_eq!(normalize_symbol("brk.b"), "BRK.B");
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(999.0), "999");
        assert_eq!(group_digits(1_000.0), "1,000");
        assert_eq!(group_digits(12_345_678.4), "12,345,678");
    }
}
