//! # Checkout Totals
//!
//! Combines a cart, an evaluated promo and the delivery charge into the
//! figures the checkout page shows and the payment step charges.
//!
//! ```text
//! subtotal ──► − discount (valid promo only, never above subtotal)
//!          ──► + delivery (waived when the promo grants free shipping)
//!          ══► total
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::promo::PromoResult;
use crate::types::{subtotal, CartItem};

/// Totals for one checkout page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    /// All amounts are in paise.
    pub subtotal: Money,
    pub discount: Money,
    pub delivery: Money,
    pub total: Money,
}

impl CheckoutSummary {
    /// Computes checkout totals.
    ///
    /// An invalid promo contributes nothing. `delivery` is the charge the
    /// store would apply without any promo.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::checkout::CheckoutSummary;
    /// use storefront_core::promo::evaluate_promo;
    /// use storefront_core::{CartItem, Money};
    ///
    /// let cart = [CartItem::new("1", "Bar", Money::from_rupees(150), 2)];
    /// let promo = evaluate_promo("FLAT25", &cart);
    /// let summary = CheckoutSummary::compute(&cart, Some(&promo), Money::from_rupees(40));
    ///
    /// assert_eq!(summary.subtotal, Money::from_rupees(300));
    /// assert_eq!(summary.discount, Money::from_rupees(25));
    /// assert_eq!(summary.total, Money::from_rupees(315));
    /// ```
    pub fn compute(cart: &[CartItem], promo: Option<&PromoResult>, delivery: Money) -> Self {
        let subtotal = subtotal(cart);

        let discount = promo
            .filter(|p| p.valid)
            .map(|p| p.discount.min(subtotal).max(Money::zero()))
            .unwrap_or_default();

        let delivery = if promo.is_some_and(PromoResult::waives_shipping) {
            Money::zero()
        } else {
            delivery
        };

        CheckoutSummary {
            subtotal,
            discount,
            delivery,
            total: subtotal.saturating_sub(discount).saturating_add(delivery),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promo::evaluate_promo;

    fn cart() -> Vec<CartItem> {
        vec![
            CartItem::new("1", "A", Money::from_rupees(100), 2),
            CartItem::new("2", "B", Money::from_rupees(50), 1),
        ]
    }

    #[test]
    fn test_without_promo() {
        let summary = CheckoutSummary::compute(&cart(), None, Money::from_rupees(40));
        assert_eq!(summary.subtotal, Money::from_rupees(250));
        assert_eq!(summary.discount, Money::zero());
        assert_eq!(summary.delivery, Money::from_rupees(40));
        assert_eq!(summary.total, Money::from_rupees(290));
    }

    #[test]
    fn test_with_valid_promo() {
        let cart = cart();
        let promo = evaluate_promo("B2G1", &cart);
        let summary = CheckoutSummary::compute(&cart, Some(&promo), Money::from_rupees(40));
        assert_eq!(summary.discount, Money::from_rupees(50));
        assert_eq!(summary.total, Money::from_rupees(240));
    }

    #[test]
    fn test_invalid_promo_is_ignored() {
        let cart = vec![CartItem::new("1", "A", Money::from_rupees(100), 2)];
        let promo = evaluate_promo("FLAT25", &cart);
        assert!(!promo.valid);

        let summary = CheckoutSummary::compute(&cart, Some(&promo), Money::zero());
        assert_eq!(summary.discount, Money::zero());
        assert_eq!(summary.total, Money::from_rupees(200));
    }

    #[test]
    fn test_free_shipping_waives_delivery() {
        let cart = cart();
        let mut promo = evaluate_promo("WELCOME10", &cart);
        promo.free_shipping = Some(true);

        let summary = CheckoutSummary::compute(&cart, Some(&promo), Money::from_rupees(40));
        assert_eq!(summary.delivery, Money::zero());
        assert_eq!(summary.total, Money::from_rupees(225));
    }

    #[test]
    fn test_discount_never_exceeds_subtotal() {
        let cart = vec![CartItem::new("1", "A", Money::from_rupees(10), 1)];
        let mut promo = evaluate_promo("WELCOME10", &cart);
        promo.discount = Money::from_rupees(500);

        let summary = CheckoutSummary::compute(&cart, Some(&promo), Money::zero());
        assert_eq!(summary.discount, Money::from_rupees(10));
        assert_eq!(summary.total, Money::zero());
    }

    #[test]
    fn test_huge_cart_total_saturates() {
        let cart = vec![CartItem::new("1", "Gold", Money::from_paise(i64::MAX / 2 + 1), 2)];

        let summary = CheckoutSummary::compute(&cart, None, Money::from_rupees(40));
        assert_eq!(summary.subtotal.paise(), i64::MAX);
        assert_eq!(summary.total.paise(), i64::MAX);
    }
}
