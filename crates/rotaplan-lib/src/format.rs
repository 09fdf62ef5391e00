//! Pure display formatting for monetary amounts and clock times.
//!
//! Formatting takes an explicit [`CurrencyStyle`] instead of touching any
//! process-wide locale state, so two callers can render the same value in
//! different conventions within one run.

use chrono::{DateTime, Local};

/// Separator and symbol conventions for rendering a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyStyle {
    /// Prefix placed before the amount, e.g. "R$ ".
    pub symbol: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
}

impl CurrencyStyle {
    /// Brazilian Portuguese convention: "R$ 2.223,80".
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$ ",
            decimal_separator: ',',
            group_separator: '.',
        }
    }

    /// Bare convention with no symbol: "2,223.80".
    pub fn plain() -> Self {
        Self {
            symbol: "",
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::plain()
    }
}

/// Render a monetary amount with two decimal places, digit grouping and the
/// style's currency symbol.
pub fn format_currency(value: f64, style: &CurrencyStyle) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(style.group_separator);
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}{}{:02}",
        style.symbol,
        if negative { "-" } else { "" },
        grouped,
        style.decimal_separator,
        fraction
    )
}

/// Render a timestamp as an "HH:MM" clock string.
pub fn format_clock(timestamp: DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}
