//! # Money Module
//!
//! Exact amounts parsed from receipt tokens.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    35.00 × 0.2 = 7.000000000000001  ❌ ceil → 8 points                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Digits                                           │
//! │    "35.00" → 3500 × 10^-2                                               │
//! │    ceil(3500 / 500) = 7  ✅ exact                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Parsers
//! - [`Money`]: the strict receipt token, digits `.` two digits. Totals.
//! - [`DecimalAmount`]: any unsigned decimal (`"10"`, `"3.5"`, `"1.999"`).
//!   Item prices as the item-description rule reads them.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::{DecimalAmount, Money};
//!
//! // Parse from a receipt token (exactly two fractional digits)
//! let total = Money::parse("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(Money::parse("35.3").is_err());
//!
//! // Item prices accept any fraction length
//! let price = DecimalAmount::parse("3.5").unwrap();
//! assert_eq!(price.ceil_scaled(1, 5), Some(1));
//! ```

use crate::error::MoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Receipt.total ─────► Money::parse ──► RoundTotal (cents % 100)         │
/// │                                    └─► QuarterMultiple (cents % 25)     │
/// │                                                                         │
/// │  Validation gate ───► Money::parse (total and every item price)         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a monetary token: one or more ASCII digits, a `.`, then
    /// exactly two ASCII digits (`^[0-9]+\.[0-9]{2}$`).
    ///
    /// ## Rules
    /// - No sign, no thousands separators, no whitespace
    /// - Leading zeros are fine (`"007.50"`)
    /// - Amounts beyond `i64` cents are rejected as `Overflow`
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse("9.00").unwrap().cents(), 900);
    /// assert!(Money::parse("9").is_err());
    /// assert!(Money::parse("1,000.00").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, MoneyError> {
        if token.is_empty() {
            return Err(MoneyError::Empty);
        }

        let invalid = || MoneyError::InvalidFormat(token.to_string());

        let (whole, fraction) = token.split_once('.').ok_or_else(invalid)?;
        if !is_digits(whole) || fraction.len() != 2 || !is_digits(fraction) {
            return Err(invalid());
        }

        let overflow = || MoneyError::Overflow(token.to_string());

        // Digits were checked above, so the only parse failure left is overflow
        let dollars: i64 = whole.parse().map_err(|_| overflow())?;
        let cents: i64 = fraction.parse().map_err(|_| invalid())?;

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Money::from_cents)
            .ok_or_else(overflow)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Checks if the amount has no fractional cents (`42.00`).
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks if the amount is a whole multiple of `step_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let total = Money::from_cents(4225); // $42.25
    /// assert!(total.is_multiple_of(25));
    /// assert!(!total.is_multiple_of(100));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }
}

// =============================================================================
// Decimal Amount
// =============================================================================

/// An unsigned decimal held exactly as `digits × 10^-scale`.
///
/// `"1.999"` is `1999 × 10^-3`; `"10"` is `10 × 10^0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalAmount {
    digits: u128,
    scale: u32,
}

impl DecimalAmount {
    /// Parses one or more ASCII digits, optionally followed by `.` and one or
    /// more ASCII digits. No sign, exponent or whitespace.
    pub fn parse(token: &str) -> Result<Self, MoneyError> {
        if token.is_empty() {
            return Err(MoneyError::Empty);
        }

        let invalid = || MoneyError::InvalidFormat(token.to_string());

        let (whole, fraction) = match token.split_once('.') {
            Some((whole, fraction)) if is_digits(fraction) => (whole, fraction),
            Some(_) => return Err(invalid()),
            None => (token, ""),
        };
        if !is_digits(whole) {
            return Err(invalid());
        }

        let overflow = || MoneyError::Overflow(token.to_string());

        // 10^38 is the largest power of ten below u128::MAX
        let scale = u32::try_from(fraction.len())
            .ok()
            .filter(|scale| *scale <= 38)
            .ok_or_else(overflow)?;

        let digits = whole
            .bytes()
            .chain(fraction.bytes())
            .try_fold(0u128, |acc, b| {
                acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
            })
            .ok_or_else(overflow)?;

        Ok(DecimalAmount { digits, scale })
    }

    /// Multiplies by `numerator / denominator` and rounds UP to the next
    /// whole number. An exact product is returned unchanged.
    ///
    /// `None` when `denominator` is zero or the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::DecimalAmount;
    ///
    /// // 12.25 × 0.2 = 2.45 → 3
    /// assert_eq!(DecimalAmount::parse("12.25").unwrap().ceil_scaled(1, 5), Some(3));
    /// // 35.00 × 0.2 = 7 exactly → 7
    /// assert_eq!(DecimalAmount::parse("35.00").unwrap().ceil_scaled(1, 5), Some(7));
    /// ```
    pub fn ceil_scaled(&self, numerator: u64, denominator: u64) -> Option<u64> {
        let scaled = self.digits.checked_mul(u128::from(numerator))?;
        let divisor = 10u128
            .checked_pow(self.scale)?
            .checked_mul(u128::from(denominator))?;
        if divisor == 0 {
            return None;
        }

        let quotient = scaled / divisor + u128::from(scaled % divisor != 0);
        u64::try_from(quotient).ok()
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================
