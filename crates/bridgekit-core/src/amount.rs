//! Amount conversion between human-readable decimal strings and integer
//! smallest-unit strings.
//!
//! Ledgers report balances as decimal strings (`"12.345678"`); the SDK works
//! in the asset's smallest indivisible unit. Conversion is exact string
//! arithmetic over an arbitrary-precision integer, rendered as a plain decimal
//! string with no fractional part or exponent notation.

use bridgekit_error::{Result, SdkError};
use num_bigint::BigUint;
use num_traits::Zero;

/// Converts a non-negative decimal string amount into an integer string
/// scaled by `decimals` fractional digits.
///
/// Fractional digits beyond `decimals` are truncated. Returns
/// [`SdkError::InvalidAmount`] for empty input, signs, exponents, or any
/// non-digit character outside a single decimal point.
///
/// ```
/// use bridgekit_core::amount::convert_float_amount_to_int;
///
/// assert_eq!(convert_float_amount_to_int("12.345678", 7).unwrap(), "123456780");
/// assert_eq!(convert_float_amount_to_int("5.5", 7).unwrap(), "55000000");
/// ```
pub fn convert_float_amount_to_int(amount: &str, decimals: u8) -> Result<String> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(SdkError::InvalidAmount("empty amount".to_string()));
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(SdkError::InvalidAmount(amount.to_string()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(SdkError::InvalidAmount(amount.to_string()));
    }

    // Shift the decimal point right by `decimals` digits, truncating any excess.
    let decimals = decimals as usize;
    let mut digits = String::with_capacity(int_part.len() + decimals);
    digits.push_str(int_part);
    if frac_part.len() >= decimals {
        digits.push_str(&frac_part[..decimals]);
    } else {
        digits.push_str(frac_part);
        digits.extend(std::iter::repeat('0').take(decimals - frac_part.len()));
    }

    if digits.is_empty() {
        return Ok("0".to_string());
    }
    let value = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| SdkError::InvalidAmount(amount.to_string()))?;
    if value.is_zero() {
        return Ok("0".to_string());
    }
    Ok(value.to_string())
}
