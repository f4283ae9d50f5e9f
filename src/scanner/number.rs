//! Lenient numeric reading for directive values

/// Read the longest decimal number at the start of `text`
///
/// Leading whitespace is skipped and anything after the number is ignored, so
/// `"1229.28mm"` reads as `1229.28`. Returns `None` when the text does not
/// start with a number at all.
pub(crate) fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Format a numeric token with two decimals and a unit suffix
///
/// Tokens that are not numeric are passed through unchanged with the suffix
/// appended.
pub(crate) fn format_with_unit(raw: &str, unit: &str) -> String {
    match parse_float_prefix(raw) {
        Some(value) => format!("{:.2}{}", value, unit),
        None => format!("{}{}", raw, unit),
    }
}
