use rust_decimal::Decimal;

use crate::error::{Result, UmsatzError};

/// Convert a German-formatted decimal string ("1.234,56") to a `Decimal`.
///
/// Strips `.` thousands separators, then swaps the decimal comma for a
/// point. Must not be fed already-normalized input: a US-style "1,234.56"
/// would come out a thousandfold off.
pub fn parse_german_decimal(raw: &str) -> Result<Decimal> {
    let normalized = raw.replace('.', "").replace(',', ".");
    normalized
        .trim()
        .parse::<Decimal>()
        .map_err(|_| UmsatzError::MalformedNumber(raw.to_string()))
}
