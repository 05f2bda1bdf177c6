//! Pricing Utilities
//!
//! Rounding, percent conversion and the small caller-side helpers built on
//! top of the kernel.

use crate::core::pricing::types::{Expense, PricingError};

/// Round to currency-cent precision
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a whole-number percentage (`30.0`) into a fraction (`0.30`)
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Parse a stored decimal-string percentage (`"30.00"`, `"12.5%"`) into
/// its whole-number value
pub fn parse_percent(raw: &str) -> Result<f64, PricingError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let value: f64 = number.parse().map_err(|_| {
        PricingError::invalid_input(format!("'{}' is not a valid percentage", raw))
    })?;

    if !value.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "'{}' is not a finite percentage",
            raw
        )));
    }

    Ok(value)
}

/// Sum itemized expenses
pub fn sum_expenses(expenses: &[Expense]) -> Result<f64, PricingError> {
    let mut total = 0.0;
    for expense in expenses {
        if !expense.amount.is_finite() || expense.amount < 0.0 {
            return Err(PricingError::invalid_input(format!(
                "expense '{}' must be a finite amount >= 0 (got {})",
                expense.name, expense.amount
            )));
        }
        total = round2(total + expense.amount);
    }
    Ok(total)
}

/// Room for discounting down from a price ceiling to the system price
pub fn max_discount(sale_price_ceiling: f64, system_price: f64) -> f64 {
    round2((sale_price_ceiling - system_price).max(0.0))
}

/// Discount of `sale_price` relative to `system_price`, in percent
pub fn discount_percent(system_price: f64, sale_price: f64) -> f64 {
    if system_price > 0.0 {
        (system_price - sale_price) / system_price * 100.0
    } else {
        0.0
    }
}

/// Format an amount for display, e.g. `1,516.67 MXN`
pub fn format_amount(amount: f64, currency: &str) -> String {
    let rounded = round2(amount);
    let negative = rounded < 0.0;
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if currency.is_empty() {
        format!("{}{}.{}", sign, grouped, frac_part)
    } else {
        format!("{}{}.{} {}", sign, grouped, frac_part, currency)
    }
}
