/// Two decimals with comma thousands separators, e.g. `12,345.60`.
/// `None` for NaN and infinities.
fn grouped(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);

    // Values that round to zero lose their sign.
    if value < 0.0 && out.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.insert(0, '-');
    }
    Some(out)
}

/// Render a dollar amount: `$1,234.50`, `-$20.00`, or `n/a`.
pub fn format_usd(value: f64) -> String {
    match grouped(value) {
        Some(s) => match s.strip_prefix('-') {
            Some(abs) => format!("-${abs}"),
            None => format!("${s}"),
        },
        None => "n/a".to_string(),
    }
}

/// Render a percentage: `3,925.00%` or `n/a`.
pub fn format_percent(value: f64) -> String {
    match grouped(value) {
        Some(s) => format!("{s}%"),
        None => "n/a".to_string(),
    }
}
