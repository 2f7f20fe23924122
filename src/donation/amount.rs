//! Donation amount parsing and formatting.
//!
//! Input is read the way a browser's `parseFloat` reads it, and output
//! matches `Number.prototype.toFixed(2)`.

/// Parses the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped and trailing garbage ignored (`"12abc"` is
/// 12). Empty, unparseable, non-finite and negative-zero input yields 0.
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];

    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }

    end
}

/// Formats `value` with exactly two decimals.
///
/// Exact binary ties (`0.125`, `2.375`, ...) round away from zero.
pub fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    let is_tie = magnitude < 1e15
        && (magnitude * 8.0).fract() == 0.0
        && (magnitude * 4.0).fract() != 0.0;

    if !is_tie {
        return format!("{:.2}", value);
    }

    let hundredths = (magnitude * 100.0).ceil();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{:.2}", sign, hundredths / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_amount("25"), 25.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("7."), 7.0);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount("+4"), 4.0);
    }

    #[test]
    fn takes_the_longest_numeric_prefix() {
        assert_eq!(parse_amount("  42 dollars"), 42.0);
        assert_eq!(parse_amount("1.5.6"), 1.5);
        assert_eq!(parse_amount("2e2"), 200.0);
        assert_eq!(parse_amount("3e"), 3.0);
        assert_eq!(parse_amount("3e+"), 3.0);
    }

    #[test]
    fn invalid_input_becomes_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("1e999"), 0.0);
        assert!(parse_amount("-0").is_sign_positive());
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_amount(25.0), "25.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(19.999), "20.00");
        assert_eq!(format_amount(-5.5), "-5.50");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(2.375), "2.38");
        assert_eq!(format_amount(-0.625), "-0.63");
        // 1.005 is stored slightly below the tie
        assert_eq!(format_amount(1.005), "1.00");
    }
}
