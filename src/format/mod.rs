// src/format/mod.rs
//
// Free-text coercion and currency rendering shared by the flows.

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn non_numeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.]").expect("valid regex"))
}

/// Coerce free text to a number
///
/// Strips every character that is not a digit or `.`; an empty or
/// non-numeric remainder coerces to `0`. `to_number("$1,234.50")` is
/// `1234.50`, `to_number("abc")` is `0`.
pub fn to_number(text: &str) -> f64 {
    let stripped = non_numeric().replace_all(text, "");
    stripped.parse::<f64>().unwrap_or(0.0)
}

/// Render a value as US-dollar currency, e.g. `$1,234.50`
pub fn format_currency(value: f64) -> AppResult<String> {
    if !value.is_finite() {
        return Err(AppError::Format(format!(
            "cannot format non-finite value: {}",
            value
        )));
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    Ok(format!("{}${}.{:02}", sign, grouped, fraction))
}

/// Currency rendering with the page's silent fallback: formatting failures
/// degrade to the raw value instead of surfacing
pub fn currency_or_raw(value: f64) -> String {
    format_currency(value).unwrap_or_else(|_| value.to_string())
}
