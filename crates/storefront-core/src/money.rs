//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Storefront prices arrive as plain numbers (₹149.50, ₹99).              │
//! │  Summing them as floats drifts:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹149.50 = 14950 paise                                                │
//! │    Every subtotal, discount and total is exact                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_rupees(100);
//! let line_total = price * 2u32;
//! assert_eq!(line_total, Money::from_rupees(200));
//! assert_eq!(line_total.to_string(), "₹200");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Paise per rupee.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for ₹).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as `subtotal - discount` may dip below zero mid-calculation
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as the raw paise integer**: JSON `2000` is ₹20, not ₹2000
/// - **Pricing sums saturate**: `Sum`, [`Money::saturating_add`] and
///   [`Money::saturating_mul_quantity`] clamp at the i64 bounds, so totals over
///   arbitrary cart snapshots cannot overflow
///
/// ## Where Money Flows
/// ```text
/// CartItem.price ──► line total ──► Cart.subtotal ──┬──► PromoEngine ──► discount
///                                                   │
///                                                   └──► CheckoutSummary.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(
    /// Amount in paise (₹1 = 100).
    i64,
);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_paise(14950); // ₹149.50
    /// assert_eq!(price.paise(), 14950);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(250).paise(), 25000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * MINOR_PER_MAJOR)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(14950).rupees(), 149);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(2999);
    /// assert_eq!(unit_price.multiply_quantity(3).paise(), 8997);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Adds, clamping at the i64 bounds instead of overflowing.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts, clamping at the i64 bounds instead of overflowing.
    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Line total for `qty` units, clamping at the i64 bounds.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(100).saturating_mul_quantity(2), Money::from_rupees(200));
    /// assert_eq!(Money::from_paise(i64::MAX / 2 + 1).saturating_mul_quantity(2).paise(), i64::MAX);
    /// ```
    #[inline]
    pub const fn saturating_mul_quantity(self, qty: u32) -> Money {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Takes `percent`% of this amount, rounded to the nearest whole rupee.
    ///
    /// Halves round up, toward positive infinity: ₹23.5 becomes ₹24 and
    /// ₹1.5 becomes ₹2. This is `floor(x + 0.5)` evaluated in integer
    /// arithmetic, so there is no float drift at the midpoint.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let subtotal = Money::from_rupees(235);
    /// assert_eq!(subtotal.percentage_to_whole_rupee(10), Money::from_rupees(24));
    ///
    /// let subtotal = Money::from_rupees(15);
    /// assert_eq!(subtotal.percentage_to_whole_rupee(10), Money::from_rupees(2));
    /// ```
    pub fn percentage_to_whole_rupee(&self, percent: u32) -> Money {
        // paise * percent / 100 gives paise; a further / 100 gives rupees.
        const SCALE: i128 = 100 * MINOR_PER_MAJOR as i128;
        let scaled = self.0 as i128 * percent as i128;
        let rupees = (scaled + SCALE / 2).div_euclid(SCALE);
        Money::from_rupees(rupees as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `₹` and the rupee amount, as it appears in shopper-facing messages.
///
/// Whole amounts print without decimals (`₹50`); fractional amounts drop
/// trailing zeros (`₹12.5`, `₹12.05`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = self.rupees().abs();
        let minor = self.paise_part();

        if minor == 0 {
            write!(f, "{}₹{}", sign, major)
        } else if minor % 10 == 0 {
            write!(f, "{}₹{}.{}", sign, major, minor / 10)
        } else {
            write!(f, "{}₹{}.{:02}", sign, major, minor)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Saturating: a sum past the i64 range sticks at the bound.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
