//! Promo code evaluation.
//!
//! ## Rule Order
//! 1. Empty code
//! 2. Empty cart
//! 3. Code not in the registry
//! 4. Registry entry without a pricing rule
//! 5. The rule itself (only FLAT25 can still reject)

use tracing::debug;

use super::registry::{self, PromoDefinition, PromoKind, KNOWN_PROMOS};
use super::{AppliedPromo, BuyTwoGetOneBreakdown, FreeUnit, PromoBreakdown, PromoResult};
use crate::error::PromoRejection;
use crate::money::Money;
use crate::types::{subtotal, CartItem};

/// WELCOME10 rate.
const WELCOME_PERCENT: u32 = 10;

/// FLAT25 amount and the subtotal it requires.
const FLAT_DISCOUNT: Money = Money::from_rupees(25);
const FLAT_MINIMUM_SUBTOTAL: Money = Money::from_rupees(250);

/// Units per Buy 2 Get 1 set.
const SET_SIZE: usize = 3;

// =============================================================================
// Engine
// =============================================================================

/// Evaluates promo codes against a registry.
///
/// `PromoEngine::default()` uses the compiled-in [`KNOWN_PROMOS`]; tests and
/// staging setups can hand in their own table.
#[derive(Debug, Clone, Copy)]
pub struct PromoEngine<'r> {
    registry: &'r [PromoDefinition],
}

impl Default for PromoEngine<'static> {
    fn default() -> Self {
        PromoEngine::new(KNOWN_PROMOS)
    }
}

impl<'r> PromoEngine<'r> {
    pub fn new(registry: &'r [PromoDefinition]) -> Self {
        PromoEngine { registry }
    }

    /// Evaluates `code_raw` against `cart`.
    ///
    /// Never panics. Every problem comes back as `valid: false` with a
    /// shopper-facing message and a zero discount. An absent cart is an
    /// empty slice.
    ///
    /// ```rust
    /// use storefront_core::promo::PromoEngine;
    /// use storefront_core::{CartItem, Money};
    ///
    /// let cart = [CartItem::new("1", "Bar", Money::from_rupees(100), 2)];
    /// let result = PromoEngine::default().evaluate(" welcome10 ", &cart);
    ///
    /// assert!(result.valid);
    /// assert_eq!(result.code, "WELCOME10");
    /// assert_eq!(result.discount, Money::from_rupees(20));
    /// ```
    pub fn evaluate(&self, code_raw: &str, cart: &[CartItem]) -> PromoResult {
        let code = registry::normalize_code(code_raw);

        let result = match self.apply(&code, cart) {
            Ok(applied) => PromoResult::applied(code, applied),
            Err(rejection) => PromoResult::rejected(code, &rejection),
        };

        debug!(
            code = %result.code,
            valid = result.valid,
            discount = %result.discount,
            lines = cart.len(),
            "Evaluated promo code"
        );

        result
    }

    fn apply(&self, code: &str, cart: &[CartItem]) -> Result<AppliedPromo, PromoRejection> {
        if code.is_empty() {
            return Err(PromoRejection::EmptyCode);
        }

        if cart.is_empty() {
            return Err(PromoRejection::EmptyCart);
        }

        let definition = registry::find(self.registry, code).ok_or(PromoRejection::UnknownCode)?;
        let kind = PromoKind::for_definition(definition).ok_or(PromoRejection::Unsupported)?;

        match kind {
            PromoKind::Welcome10 => Ok(welcome_percentage(cart)),
            PromoKind::BuyTwoGetOne => Ok(buy_two_get_one(cart)),
            PromoKind::Flat25 => flat_amount(cart),
        }
    }
}

/// Evaluates `code_raw` against `cart` using the built-in registry.
pub fn evaluate_promo(code_raw: &str, cart: &[CartItem]) -> PromoResult {
    PromoEngine::default().evaluate(code_raw, cart)
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// WELCOME10: 10% of the subtotal, rounded to the nearest rupee (halves up).
fn welcome_percentage(cart: &[CartItem]) -> AppliedPromo {
    let discount = subtotal(cart).percentage_to_whole_rupee(WELCOME_PERCENT);
    AppliedPromo::new(discount, "10% discount applied")
}

/// FLAT25: fixed ₹25 once the subtotal reaches ₹250.
fn flat_amount(cart: &[CartItem]) -> Result<AppliedPromo, PromoRejection> {
    if subtotal(cart) < FLAT_MINIMUM_SUBTOTAL {
        return Err(PromoRejection::UnmetMinimum {
            required: FLAT_MINIMUM_SUBTOTAL,
        });
    }

    Ok(AppliedPromo::new(
        FLAT_DISCOUNT,
        format!("Flat {} off applied", FLAT_DISCOUNT),
    ))
}

/// B2G1: for every three units in the cart, one unit is free.
///
/// Units are pooled across the whole cart and ordered by price ascending,
/// ties kept in cart order then unit order. The first
/// `floor(units / 3)` of that order are free.
fn buy_two_get_one(cart: &[CartItem]) -> AppliedPromo {
    let total_items: usize = cart.iter().map(|item| item.quantity as usize).sum();
    let eligible_sets = total_items / SET_SIZE;
    let free_items = cheapest_units(cart, eligible_sets);
    let discount: Money = free_items.iter().map(|unit| unit.price).sum();
    let next_free = SET_SIZE - total_items % SET_SIZE;

    let message = if eligible_sets > 0 {
        let mut message = format!("Buy 2 Get 1 applied ({} off", discount);
        if eligible_sets > 1 {
            message.push_str(&format!(" for {} free items", eligible_sets));
        }
        message.push(')');
        message
    } else {
        let mut message = String::from("Add 3 items to get 1 free!");
        if total_items % SET_SIZE != 0 {
            message.push_str(&format!(" (Add {} more for a free item)", next_free));
        }
        message
    };

    AppliedPromo {
        discount,
        message,
        free_shipping: None,
        breakdown: Some(PromoBreakdown::BuyTwoGetOne(BuyTwoGetOneBreakdown {
            eligible_sets,
            free_items,
            total_items,
            next_free: if eligible_sets == 0 { next_free } else { 0 },
        })),
    }
}

/// The `count` cheapest units of the cart, cheapest first.
///
/// Equivalent to expanding every line into `quantity` units and stable
/// sorting by price: a line's units are adjacent and share a price, so a
/// stable sort of the lines yields the same unit order without materializing
/// units that cannot be free.
fn cheapest_units(cart: &[CartItem], count: usize) -> Vec<FreeUnit> {
    let mut lines: Vec<(usize, &CartItem)> = cart.iter().enumerate().collect();
    lines.sort_by_key(|(_, item)| item.price);

    lines
        .into_iter()
        .flat_map(|(cart_idx, item)| {
            (0..item.quantity).map(move |unit_idx| FreeUnit {
                name: item.name.clone(),
                price: item.price,
                cart_idx,
                unit_idx,
            })
        })
        .take(count)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
