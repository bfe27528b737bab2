/// Whole dollars with thousands separators: `125000` -> `$125,000`.
pub fn format_currency(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rounded to a whole percent, halves away from zero: `47.5` -> `48%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(8_000), "$8,000");
        assert_eq!(format_currency(125_000), "$125,000");
        assert_eq!(format_currency(2_037_000), "$2,037,000");
    }

    #[test]
    fn test_format_percent_rounds_half_up() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(47.5), "48%");
        assert_eq!(format_percent(61.25), "61%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
