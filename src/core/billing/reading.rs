// Meter readings and currency amounts as they travel through the stores.
//
// Purpose
// - Readings and amounts are stored as text. Parse them into decimals at the edge of the
//   billing computation and render them back with a single, stable format.
//
// Notes
// - A blank previous reading means the meter starts at zero (new connections).
// - A blank present reading is an input error: nothing has been read yet.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReadingError {
    #[error("{field} reading is required")]
    Missing { field: &'static str },

    #[error("{field} reading '{value}' is not a number")]
    Malformed { field: &'static str, value: String },

    #[error("{field} reading '{value}' must not be negative")]
    Negative { field: &'static str, value: String },
}

pub fn parse_previous_reading(raw: &str) -> Result<Decimal, ReadingError> {
    if raw.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_reading("previous", raw)
}

pub fn parse_present_reading(raw: &str) -> Result<Decimal, ReadingError> {
    if raw.trim().is_empty() {
        return Err(ReadingError::Missing { field: "present" });
    }
    parse_reading("present", raw)
}

fn parse_reading(field: &'static str, raw: &str) -> Result<Decimal, ReadingError> {
    let value = raw.trim();
    let reading = Decimal::from_str(value).map_err(|_| ReadingError::Malformed {
        field,
        value: value.to_string(),
    })?;
    if reading.is_sign_negative() && !reading.is_zero() {
        return Err(ReadingError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(reading)
}

/// Round half away from zero to two places and always render two decimals.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

pub fn format_currency(amount: Decimal) -> String {
    round_currency(amount).to_string()
}

/// Quantities drop trailing zeros: `6`, `6.5`.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}
