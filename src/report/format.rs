/// Formats a number the way an en-US locale does: `,` between thousands,
/// at most three fraction digits, no trailing zeros.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let mut res = String::with_capacity(rounded.len() + int.len() / 3 + 1);
    if value < 0.0 && (int != "0" || !frac.is_empty()) {
        res.push('-');
    }
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            res.push(',');
        }
        res.push(digit);
    }
    if !frac.is_empty() {
        res.push('.');
        res.push_str(frac);
    }
    res
}

/// Plain number without grouping, `5` rather than `5.0`
pub fn plain(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod test {
    #[test]
    fn thousands() {
        assert_eq!("0", super::thousands(0.0));
        assert_eq!("999", super::thousands(999.0));
        assert_eq!("1,000", super::thousands(1000.0));
        assert_eq!("12,000", super::thousands(12000.0));
        assert_eq!("1,234,567", super::thousands(1234567.0));
        assert_eq!("1,234.5", super::thousands(1234.5));
        assert_eq!("0.333", super::thousands(1.0 / 3.0));
        assert_eq!("-2,500", super::thousands(-2500.0));
        assert_eq!("0", super::thousands(-0.0001));
    }

    #[test]
    fn plain() {
        assert_eq!("5", super::plain(5.0));
        assert_eq!("7.5", super::plain(7.5));
    }
}
