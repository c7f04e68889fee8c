//! Quantity and address conversions for transaction construction.
//!
//! Transactions arrive with hex quantities (`0x5208`), the swap flow carries
//! decimal strings, and the signing layer expects hex again. This module holds
//! the conversions between those representations plus the balance sufficiency
//! check used for account eligibility.
//!
//! # Conventions
//!
//! - Hex input may carry a `0x` prefix. A bare `0x` is zero.
//! - Hex output is lowercase, `0x`-prefixed and never zero-padded (`0x0` for zero).
//! - Integer input is plain base-10 ASCII digits. Signs, separators and
//!   whitespace are rejected.
//! - Decimal amounts are compared exactly against smallest-unit balances; no
//!   floating point is involved.

use alloy::primitives::Address;
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use std::cmp::Ordering;
use std::str::FromStr;
use crate::errors::{ConversionError, Result};

/// Strip a leading `0x`/`0X` prefix if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse a hex quantity into a BigUint.
///
/// # Errors
///
/// Returns `ConversionError::InvalidHexQuantity` if the string contains
/// anything other than hex digits after the optional prefix.
pub fn hex_to_biguint(s: &str) -> Result<BigUint> {
    let digits = strip_hex_prefix(s);
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConversionError::InvalidHexQuantity { input: s.to_string() }.into());
    }

    BigUint::from_str_radix(digits, 16)
        .map_err(|_| ConversionError::InvalidHexQuantity { input: s.to_string() }.into())
}

/// Convert a hex quantity to its base-10 string representation.
///
/// `"0x5208"` becomes `"21000"`.
pub fn hex_to_decimal_string(s: &str) -> Result<String> {
    Ok(hex_to_biguint(s)?.to_str_radix(10))
}

/// Parse a non-negative base-10 integer string.
///
/// # Errors
///
/// Returns `ConversionError::InvalidInteger` for empty input, signs,
/// fractional parts or any non-digit character.
pub fn parse_integer(s: &str) -> Result<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::InvalidInteger { input: s.to_string() }.into());
    }

    BigUint::from_str_radix(s, 10)
        .map_err(|_| ConversionError::InvalidInteger { input: s.to_string() }.into())
}

/// Encode a BigUint as a `0x`-prefixed lowercase hex string.
pub fn biguint_to_hex(val: &BigUint) -> String {
    format!("0x{:x}", val)
}

/// Convert a base-10 integer string to a `0x`-prefixed hex string.
///
/// `"1000000000000000000"` becomes `"0xde0b6b3a7640000"`.
pub fn decimal_to_hex_string(s: &str) -> Result<String> {
    Ok(biguint_to_hex(&parse_integer(s)?))
}

/// A non-negative decimal amount held exactly as `digits / 10^scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalAmount {
    digits: BigUint,
    scale: u32,
}

impl DecimalAmount {
    /// The amount with the decimal point removed.
    pub fn digits(&self) -> &BigUint {
        &self.digits
    }

    /// Number of fractional digits in the original string.
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl FromStr for DecimalAmount {
    type Err = crate::errors::SwapError;

    fn from_str(s: &str) -> Result<Self> {
        parse_decimal_amount(s)
    }
}

/// Parse a human-readable decimal amount such as `"1.5"`, `"0.001"` or `"2"`.
///
/// A leading or trailing point is accepted as long as at least one digit is
/// present (`".5"`, `"3."`).
///
/// # Errors
///
/// Returns `ConversionError::InvalidDecimalAmount` for empty input, signs,
/// exponents, more than one decimal point or any non-digit character.
pub fn parse_decimal_amount(s: &str) -> Result<DecimalAmount> {
    let invalid = || ConversionError::InvalidDecimalAmount { input: s.to_string() };

    let (int_part, frac_part) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (s, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid().into());
    }

    let combined = format!("{}{}", int_part, frac_part);
    let digits = BigUint::from_str_radix(&combined, 10).map_err(|_| invalid())?;
    let scale = u32::try_from(frac_part.len()).map_err(|_| invalid())?;

    Ok(DecimalAmount { digits, scale })
}

/// Compare a smallest-unit balance against a decimal amount.
///
/// The balance is interpreted as `balance / 10^decimals`. Both sides are
/// brought to a common scale by cross-multiplication so that the comparison
/// is exact for any precision.
pub fn compare_balance_to_amount(balance: &BigUint, decimals: u8, amount: &DecimalAmount) -> Ordering {
    let ten = BigUint::from(10u32);
    let lhs = balance * ten.pow(amount.scale);
    let rhs = &amount.digits * ten.pow(u32::from(decimals));
    lhs.cmp(&rhs)
}

/// Whether a smallest-unit balance covers the requested decimal amount.
///
/// Equality counts as sufficient.
pub fn balance_covers_amount(balance: &BigUint, decimals: u8, amount: &DecimalAmount) -> bool {
    compare_balance_to_amount(balance, decimals, amount) != Ordering::Less
}

/// Parse a string representation of an Ethereum address.
///
/// Accepts addresses with or without the "0x" prefix. The address must be
/// exactly 20 bytes (40 hex characters).
///
/// # Errors
///
/// Returns `ConversionError::AddressParsingFailed` if the string contains
/// invalid hex characters or has the wrong length.
pub fn string_to_h160(s: &str) -> Result<Address> {
    Address::from_str(strip_hex_prefix(s))
        .map_err(|source| ConversionError::AddressParsingFailed {
            input: s.to_string(),
            source: alloy::primitives::AddressError::Hex(source),
        }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SwapError;

    #[test]
    fn test_hex_to_decimal_string() {
        assert_eq!(hex_to_decimal_string("0x5208").unwrap(), "21000");
        assert_eq!(hex_to_decimal_string("5208").unwrap(), "21000");
        assert_eq!(hex_to_decimal_string("0X0a").unwrap(), "10");
        assert_eq!(hex_to_decimal_string("0x0").unwrap(), "0");
        assert_eq!(hex_to_decimal_string("0x").unwrap(), "0");
        assert_eq!(
            hex_to_decimal_string("0x4a817c800").unwrap(),
            "20000000000"
        );
    }

    #[test]
    fn test_hex_to_decimal_string_rejects_garbage() {
        for input in ["0xzz", "0x12 ", "-0x1", "0x1_0", "0x+1"] {
            let result = hex_to_decimal_string(input);
            assert!(
                matches!(result, Err(SwapError::Conversion(ConversionError::InvalidHexQuantity { .. }))),
                "Expected hex error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_decimal_to_hex_string() {
        assert_eq!(
            decimal_to_hex_string("1000000000000000000").unwrap(),
            "0xde0b6b3a7640000"
        );
        assert_eq!(decimal_to_hex_string("0").unwrap(), "0x0");
        assert_eq!(decimal_to_hex_string("255").unwrap(), "0xff");
        assert_eq!(decimal_to_hex_string("007").unwrap(), "0x7");
    }

    #[test]
    fn test_decimal_to_hex_string_rejects_non_integers() {
        for input in ["", "-1", "1.5", "+1", "1e18", " 1", "1_000", "0x10"] {
            let result = decimal_to_hex_string(input);
            assert!(
                matches!(result, Err(SwapError::Conversion(ConversionError::InvalidInteger { .. }))),
                "Expected integer error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_hex_and_decimal_agree_on_large_values() {
        let wei = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let hex = decimal_to_hex_string(wei).unwrap();
        assert_eq!(hex, format!("0x{}", "f".repeat(64)));
        assert_eq!(hex_to_decimal_string(&hex).unwrap(), wei);
    }

    #[test]
    fn test_parse_decimal_amount() {
        let amount = parse_decimal_amount("1.50").unwrap();
        assert_eq!(amount.digits(), &BigUint::from(150u32));
        assert_eq!(amount.scale(), 2);

        let amount = parse_decimal_amount("42").unwrap();
        assert_eq!(amount.digits(), &BigUint::from(42u32));
        assert_eq!(amount.scale(), 0);

        assert!(parse_decimal_amount(".5").is_ok());
        assert!(parse_decimal_amount("3.").is_ok());
        assert!("0.25".parse::<DecimalAmount>().is_ok());
    }

    #[test]
    fn test_parse_decimal_amount_validation() {
        let invalid_amounts = vec![
            ("", "empty"),
            (".", "lone point"),
            ("-1", "negative"),
            ("1.2.3", "two points"),
            ("1e3", "exponent"),
            ("abc", "letters"),
            (" 1", "whitespace"),
        ];

        for (amount, description) in invalid_amounts {
            let result = parse_decimal_amount(amount);
            assert!(result.is_err(), "Expected error for {}: {:?}", description, amount);
        }
    }

    #[test]
    fn test_balance_covers_amount() {
        // 1.5 ETH in wei
        let balance = BigUint::from(1_500_000_000_000_000_000u64);

        assert!(balance_covers_amount(&balance, 18, &parse_decimal_amount("1").unwrap()));
        assert!(balance_covers_amount(&balance, 18, &parse_decimal_amount("1.5").unwrap()));
        assert!(balance_covers_amount(&balance, 18, &parse_decimal_amount("1.500000").unwrap()));
        assert!(!balance_covers_amount(&balance, 18, &parse_decimal_amount("1.5000000000000000001").unwrap()));
        assert!(!balance_covers_amount(&balance, 18, &parse_decimal_amount("2").unwrap()));
    }

    #[test]
    fn test_balance_covers_amount_low_precision_asset() {
        // 12.34 USDC with 6 decimals
        let balance = BigUint::from(12_340_000u64);

        assert_eq!(
            compare_balance_to_amount(&balance, 6, &parse_decimal_amount("12.34").unwrap()),
            Ordering::Equal
        );
        assert!(balance_covers_amount(&balance, 6, &parse_decimal_amount("12.339999").unwrap()));
        assert!(!balance_covers_amount(&balance, 6, &parse_decimal_amount("12.3400001").unwrap()));
        assert!(balance_covers_amount(&BigUint::zero(), 6, &parse_decimal_amount("0").unwrap()));
    }

    #[test]
    fn test_string_to_h160() {
        let with_prefix = string_to_h160("0x000000000022D473030F116dDEE9F6B43aC78BA3").unwrap();
        let without_prefix = string_to_h160("000000000022D473030F116dDEE9F6B43aC78BA3").unwrap();
        assert_eq!(with_prefix, without_prefix);

        assert!(string_to_h160("0x1234").is_err());
        assert!(string_to_h160("0xzz0000000022D473030F116dDEE9F6B43aC78BA3").is_err());
    }
}
