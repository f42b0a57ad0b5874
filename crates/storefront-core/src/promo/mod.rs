//! # Promo Module
//!
//! Evaluates a shopper-typed promo code against a cart snapshot.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  " b2g1 " + cart                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_code ──► "B2G1"                                              │
//! │       │                                                                 │
//! │       ├── ""            → EmptyCode   "Enter a promo code"             │
//! │       ├── cart empty    → EmptyCart   "Add items first"                │
//! │       ├── not in table  → UnknownCode "Invalid code"                   │
//! │       ├── no rule       → Unsupported "Unsupported code"               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WELCOME10 │ B2G1 │ FLAT25 ──► PromoResult { valid, message, discount } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Evaluation is a pure function of its inputs: no I/O, no shared mutable
//! state, safe to call from any thread.

pub mod engine;
pub mod registry;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PromoRejection;
use crate::money::Money;

pub use engine::{evaluate_promo, PromoEngine};
pub use registry::{known_codes, lookup, normalize_code, PromoDefinition, PromoKind, KNOWN_PROMOS};

// =============================================================================
// Promo Result
// =============================================================================

/// Outcome of evaluating a promo code.
///
/// Built fresh for every evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PromoResult {
    /// Normalized (trimmed, upper-cased) code as evaluated.
    pub code: String,

    /// Whether the discount should be applied.
    pub valid: bool,

    /// Shopper-facing explanation.
    pub message: String,

    /// Amount to subtract from the subtotal, in paise: JSON `2000` is ₹20.
    /// Zero when `valid` is false.
    pub discount: Money,

    /// When true, checkout zeroes the delivery charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub free_shipping: Option<bool>,

    /// Promo-specific detail for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub breakdown: Option<PromoBreakdown>,
}

impl PromoResult {
    pub(crate) fn applied(code: String, applied: AppliedPromo) -> Self {
        PromoResult {
            code,
            valid: true,
            message: applied.message,
            discount: applied.discount,
            free_shipping: applied.free_shipping,
            breakdown: applied.breakdown,
        }
    }

    pub(crate) fn rejected(code: String, rejection: &PromoRejection) -> Self {
        PromoResult {
            code,
            valid: false,
            message: rejection.to_string(),
            discount: Money::zero(),
            free_shipping: None,
            breakdown: None,
        }
    }

    /// True when the delivery charge should be waived.
    #[inline]
    pub fn waives_shipping(&self) -> bool {
        self.valid && self.free_shipping == Some(true)
    }
}

/// What a pricing rule produces when it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppliedPromo {
    pub discount: Money,
    pub message: String,
    pub free_shipping: Option<bool>,
    pub breakdown: Option<PromoBreakdown>,
}

impl AppliedPromo {
    pub(crate) fn new(discount: Money, message: impl Into<String>) -> Self {
        AppliedPromo {
            discount,
            message: message.into(),
            free_shipping: None,
            breakdown: None,
        }
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Promo-specific detail attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum PromoBreakdown {
    BuyTwoGetOne(BuyTwoGetOneBreakdown),
}

/// Which units Buy 2 Get 1 made free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BuyTwoGetOneBreakdown {
    /// `floor(total_items / 3)`.
    pub eligible_sets: usize,

    /// The cheapest `eligible_sets` units, cheapest first.
    pub free_items: Vec<FreeUnit>,

    /// Units in the cart.
    pub total_items: usize,

    /// Units still needed for a first free item; 0 once one is earned.
    pub next_free: usize,
}

/// A single unit made free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FreeUnit {
    pub name: String,
    /// Unit price in paise.
    pub price: Money,
    /// Index of the originating cart line.
    pub cart_idx: usize,
    /// 0-based unit index within that line's quantity.
    pub unit_idx: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartItem;

    #[test]
    fn test_rejected_result_has_no_discount() {
        let result = PromoResult::rejected("FLAT25".to_string(), &PromoRejection::UnknownCode);
        assert!(!result.valid);
        assert_eq!(result.discount, Money::zero());
        assert_eq!(result.message, "Invalid code");
        assert!(!result.waives_shipping());
    }

    #[test]
    fn test_waives_shipping_requires_valid_flag() {
        let mut applied = AppliedPromo::new(Money::zero(), "Free delivery");
        applied.free_shipping = Some(true);
        let mut result = PromoResult::applied("SHIPFREE".to_string(), applied);
        assert!(result.waives_shipping());

        result.valid = false;
        assert!(!result.waives_shipping());
    }

    #[test]
    fn test_json_omits_absent_optionals() {
        let result = PromoResult::applied(
            "WELCOME10".to_string(),
            AppliedPromo::new(Money::from_rupees(20), "10% discount applied"),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "WELCOME10",
                "valid": true,
                "message": "10% discount applied",
                "discount": 2000
            })
        );
    }

    #[test]
    fn test_discount_travels_as_paise() {
        let cart = [CartItem::new("1", "Bar", Money::from_rupees(100), 2)];
        let result = evaluate_promo("WELCOME10", &cart);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["discount"], 2000);
        assert_eq!(Money::from_paise(2000).to_string(), "₹20");
    }

    #[test]
    fn test_breakdown_json_uses_camel_case() {
        let breakdown = PromoBreakdown::BuyTwoGetOne(BuyTwoGetOneBreakdown {
            eligible_sets: 1,
            free_items: vec![FreeUnit {
                name: "B".to_string(),
                price: Money::from_rupees(50),
                cart_idx: 1,
                unit_idx: 0,
            }],
            total_items: 3,
            next_free: 0,
        });

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eligibleSets": 1,
                "freeItems": [{ "name": "B", "price": 5000, "cartIdx": 1, "unitIdx": 0 }],
                "totalItems": 3,
                "nextFree": 0
            })
        );
    }
}
