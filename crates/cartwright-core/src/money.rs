//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Discount chains make it worse:                                         │
//! │    50.53 × 0.85 × 0.82 accumulates error at every step                  │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 decimals (28 significant digits)                 │
//! │    Every add/sub/mul and every ÷100 in the pricing path is exact.       │
//! │    Rounding happens exactly once, at the display boundary.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartwright_core::money::Money;
//!
//! // Create from an exact decimal literal (preferred)
//! let price: Money = "10.99".parse().unwrap();
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! assert_eq!(doubled.to_string(), "21.98");
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(10.99); // NO SUCH METHOD EXISTS!
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact base-10 decimal.
///
/// ## Design Decisions
/// - **Newtype over `Decimal`**: zero-cost, keeps raw decimals out of pricing
///   signatures
/// - **Exactness**: intermediate results are never rounded to two places;
///   only [`fmt::Display`] rounds, and only for rendering
/// - **Derives**: full serde support so adapters can marshal prices out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use cartwright_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cartwright_core::money::Money;
    ///
    /// let unit_price: Money = "2.99".parse().unwrap();
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.to_string(), "8.97");
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Computes `value × (100 − percent) / 100`. The division is by the
    /// literal integer 100, which is exact for any integer percentage over an
    /// exactly-representable price.
    ///
    /// The percentage is applied unconditionally; range-checking discounts is
    /// the caller's validation concern, not an arithmetic one.
    ///
    /// ## Example
    /// ```rust
    /// use cartwright_core::money::Money;
    ///
    /// let subtotal: Money = "180.00".parse().unwrap();
    /// let discounted = subtotal.apply_percentage_discount(18);
    /// assert_eq!(discounted.to_string(), "147.60");
    /// ```
    pub fn apply_percentage_discount(&self, percent: i64) -> Money {
        let remainder = Decimal::ONE_HUNDRED - Decimal::from(percent);
        Money(self.0 * remainder / Decimal::ONE_HUNDRED)
    }
}

// =============================================================================
// Construction from Literals
// =============================================================================

/// Parses a money value from an exact decimal literal such as `"50.53"`.
///
/// ## Errors
/// Fails with [`CoreError::InvalidMoneyLiteral`] when the literal is not an
/// exact base-10 decimal. The value is never silently coerced to zero.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(literal.trim())
            .map(Money)
            .map_err(|_| CoreError::InvalidMoneyLiteral {
                literal: literal.to_string(),
            })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders with exactly two digits after the decimal
/// point.
///
/// Banker's rounding (round half to even) is applied here and only here; the
/// value itself keeps its full precision for further arithmetic.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        write!(f, "{rendered:.2}")
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Multiplication by an exact decimal factor.
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

/// Division by a non-zero integer.
///
/// Results that do not terminate within 28 significant digits are rounded at
/// the final digit with banker's rounding; percentage math (÷100) is always
/// exact.
impl Div<i64> for Money {
    type Output = Self;

    #[inline]
    fn div(self, divisor: i64) -> Self {
        Money(self.0 / Decimal::from(divisor))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
