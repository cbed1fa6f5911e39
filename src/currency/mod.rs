//! Dollar formatting used by list rows and dashboard cards.

const SYMBOL: &str = "$";
const PRECISION: usize = 2;

/// Row amount with an explicit sign, e.g. `+$45.20` or `-$12.00`.
pub fn format_signed(amount: f64) -> String {
    let sign = if amount >= 0.0 { '+' } else { '-' };
    format!("{}{}{}", sign, SYMBOL, format_number(amount.abs()))
}

/// Card amount; negatives keep the sign after the symbol (`$-5.00`).
pub fn format_plain(amount: f64) -> String {
    format!("{}{}", SYMBOL, format_number(amount))
}

/// Fixed two-decimal rendering. Rounding noise such as `-0.001` renders as `0.00`.
pub fn format_number(value: f64) -> String {
    let body = format!("{:.*}", PRECISION, value);
    match body.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => body,
    }
}
