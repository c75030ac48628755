//! # Price Module
//!
//! Provides the `Price` type for handling monetary values safely.
//!
//! ## Integer Cents, Decimal Wire
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The storefront API speaks JSON decimals ("price": 109.95), so the     │
//! │  wire format is fixed. We convert to integer cents at the boundary:    │
//! │                                                                         │
//! │    JSON 109.95 ──deserialize──► Price(10995) ──serialize──► 109.95     │
//! │                                                                         │
//! │  All arithmetic (line totals, cart totals) happens in exact integer    │
//! │  cents. Only (de)serialization touches f64.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::price::Price;
//!
//! let price = Price::from_cents(1099); // $10.99
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.cents(), 3297);
//! ```

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Price Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Sums and differences stay exact at catalog scale
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Custom serde**: The wire format is a JSON decimal in major units,
///   converted to/from cents at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::price::Price;
    ///
    /// let price = Price::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Creates a Price from a decimal amount in major units.
    ///
    /// Rounds to the nearest cent. This is the only place a float enters
    /// the type; everything downstream is integer arithmetic.
    pub fn from_decimal(amount: f64) -> Self {
        Price((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal in major units (for the wire format).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies the price by a quantity (line total).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::price::Price;
    ///
    /// let unit_price = Price::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Price(self.0 * qty as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the price in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Addition of two Price values.
impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Sum over an iterator of prices (cart totals).
impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), Add::add)
    }
}

// =============================================================================
// Serde: decimal wire format
// =============================================================================

/// Serializes as a JSON decimal in major units (what the API expects).
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

/// Deserializes from the API's JSON decimal (integers also accepted).
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(D::Error::custom("price must be a finite number"));
        }
        Ok(Price::from_decimal(amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1099);
        assert_eq!(price.cents(), 1099);
        assert_eq!(price.dollars(), 10);
        assert_eq!(price.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds_to_cent() {
        assert_eq!(Price::from_decimal(109.95).cents(), 10995);
        assert_eq!(Price::from_decimal(9.99).cents(), 999);
        // Float noise one ulp away from an exact cent still rounds cleanly
        assert_eq!(Price::from_decimal(0.1 + 0.2).cents(), 30);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Price::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Price::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Price::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Price::from_cents(1000);
        let b = Price::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);

        let total: Price = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_wire_round_trip() {
        let json = "109.95";
        let price: Price = serde_json::from_str(json).unwrap();
        assert_eq!(price.cents(), 10995);
        assert_eq!(serde_json::to_string(&price).unwrap(), "109.95");
    }

    #[test]
    fn test_deserialize_integer_amount() {
        let price: Price = serde_json::from_str("15").unwrap();
        assert_eq!(price.cents(), 1500);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Price::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Price::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }
}
