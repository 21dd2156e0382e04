//! Display formatting for prices, ratings and labels.

/// Placeholder shown for a price that is not a finite number.
pub const INVALID_PRICE: &str = "$--";

/// Format a price as dollars with two decimals and thousands separators,
/// e.g. `1234.5` becomes `$1,234.50`. NaN and infinite prices format as
/// [`INVALID_PRICE`].
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return INVALID_PRICE.to_string();
    }
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Format a rating with a single decimal, e.g. `4` becomes `4.0`.
pub fn format_rating(rate: f64) -> String {
    format!("{:.1}", rate)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
