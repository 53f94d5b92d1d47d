use crate::domain::model::Money;
use crate::utils::error::{MenuError, Result};

fn invalid_price(value: impl ToString, reason: &str) -> MenuError {
    MenuError::InvalidPrice {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Largest accepted unit price, in major units.
pub const MAX_PRICE_MAJOR: f64 = 1_000_000.0;

/// Converts a major-unit amount (13, 12.5) into cents, rounding to the nearest cent.
pub fn money_from_major(amount: f64) -> Result<Money> {
    if !amount.is_finite() {
        return Err(invalid_price(amount, "price must be a finite number"));
    }
    if amount < 0.0 {
        return Err(invalid_price(amount, "price cannot be negative"));
    }
    if amount > MAX_PRICE_MAJOR {
        return Err(invalid_price(amount, "price exceeds the maximum of 1000000"));
    }
    Ok(Money::from_minor((amount * 100.0).round() as u64))
}

/// Parses a display string such as "$13.00", "1,250.50 USD" or "IQD 9000".
/// Commas are treated as thousands separators.
pub fn parse_formatted_price(input: &str) -> Result<Money> {
    let trimmed = input.trim();
    if trimmed.contains('-') {
        return Err(invalid_price(input, "price cannot be negative"));
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if digits.is_empty() {
        return Err(invalid_price(input, "no digits found"));
    }

    let amount: f64 = digits
        .parse()
        .map_err(|_| invalid_price(input, "malformed number"))?;
    money_from_major(amount)
}
