//! # Domain Types
//!
//! The cart a shopper builds before checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Cart       │   │    CartItem     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  items ─────────┼──►│  id             │                             │
//! │  │  (insertion     │   │  name           │                             │
//! │  │   order)        │   │  price (Money)  │                             │
//! │  └─────────────────┘   │  quantity (≥ 1) │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants (upheld by `Cart` mutations)
//! - Items are unique by `id` (adding the same id increases quantity)
//! - `quantity >= 1`; setting a quantity to 0 removes the line
//! - At most `MAX_CART_ITEMS` lines, at most `MAX_ITEM_QUANTITY` per line

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_cart_size, validate_item_id, validate_item_name, validate_price, validate_quantity,
};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// One line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Purchasable item id; the same id means the same product/variant.
    pub id: String,

    /// Display label, used in promo messages.
    pub name: String,

    /// Unit price in paise, frozen when the item was added.
    pub price: Money,

    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line.
    ///
    /// No validation happens here; `Cart::add_item` validates on insert.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        CartItem {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopper's cart.
///
/// ## Usage
/// ```rust
/// use storefront_core::{Cart, CartItem, Money};
///
/// let mut cart = Cart::new();
/// cart.add_item(CartItem::new("bar", "Bar", Money::from_rupees(100), 2)).unwrap();
/// cart.add_item(CartItem::new("bar", "Bar", Money::from_rupees(100), 1)).unwrap();
///
/// assert_eq!(cart.items().len(), 1);
/// assert_eq!(cart.total_units(), 3);
/// assert_eq!(cart.subtotal(), Money::from_rupees(300));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Lines in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds a line, or increases the quantity of the line with the same id.
    ///
    /// ## Behavior
    /// - Same id already present: quantities are summed, the stored name and price are kept
    /// - New id: appended at the end
    ///
    /// ## Errors
    /// - `Validation` for an empty id/name, negative price or zero quantity
    /// - `QuantityTooLarge` if the merged quantity exceeds `MAX_ITEM_QUANTITY`
    /// - `CartTooLarge` if a new line would exceed `MAX_CART_ITEMS`
    pub fn add_item(&mut self, item: CartItem) -> CoreResult<()> {
        validate_item_id(&item.id)?;
        validate_item_name(&item.name)?;
        validate_price(item.price)?;
        validate_quantity(item.quantity)?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let merged = existing.quantity as u64 + item.quantity as u64;
            if merged > MAX_ITEM_QUANTITY as u64 {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = merged as u32;
            return Ok(());
        }

        validate_cart_size(self.items.len()).map_err(|_| CoreError::CartTooLarge {
            max: crate::MAX_CART_ITEMS,
        })?;

        self.items.push(item);
        Ok(())
    }

    /// Sets the quantity of a line. A quantity of 0 removes it.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity as u64,
                max: MAX_ITEM_QUANTITY,
            });
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::ItemNotFound(id.to_string())),
        }
    }

    /// Removes a line by id.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn subtotal(&self) -> Money {
        subtotal(&self.items)
    }
}

impl AsRef<[CartItem]> for Cart {
    fn as_ref(&self) -> &[CartItem] {
        &self.items
    }
}

/// Sum of `price × quantity` over a cart snapshot.
pub fn subtotal(items: &[CartItem]) -> Money {
    items.iter().map(CartItem::line_total).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::MAX_CART_ITEMS;

    fn item(id: &str, rupees: i64, quantity: u32) -> CartItem {
        CartItem::new(id, format!("Item {}", id), Money::from_rupees(rupees), quantity)
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("1", 100, 3).line_total(), Money::from_rupees(300));
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 100, 2)).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_units(), 2);
        assert_eq!(cart.subtotal(), Money::from_rupees(200));
    }

    #[test]
    fn test_cart_add_same_id_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 100, 2)).unwrap();
        cart.add_item(item("1", 100, 3)).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(item("b", 50, 1)).unwrap();
        cart.add_item(item("a", 100, 1)).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_cart_rejects_invalid_items() {
        let mut cart = Cart::new();

        let err = cart.add_item(item("1", 100, 0)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        let err = cart.add_item(item("1", -1, 1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));

        let err = cart.add_item(CartItem::new("", "x", Money::zero(), 1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_merged_quantity_limit() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 10, MAX_ITEM_QUANTITY)).unwrap();

        let err = cart.add_item(item("1", 10, 1)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { requested: 1000, .. }));
        assert_eq!(cart.items()[0].quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_cart_line_limit() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_ITEMS {
            cart.add_item(item(&i.to_string(), 1, 1)).unwrap();
        }

        let err = cart.add_item(item("overflow", 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));

        // Existing lines can still grow.
        cart.add_item(item("0", 1, 1)).unwrap();
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 100, 2)).unwrap();

        cart.update_quantity("1", 7).unwrap();
        assert_eq!(cart.items()[0].quantity, 7);

        assert!(matches!(
            cart.update_quantity("missing", 1),
            Err(CoreError::ItemNotFound(_))
        ));
        assert!(matches!(
            cart.update_quantity("1", MAX_ITEM_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 100, 2)).unwrap();
        cart.add_item(item("2", 50, 1)).unwrap();

        cart.update_quantity("1", 0).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, "2");
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 100, 2)).unwrap();
        cart.add_item(item("2", 50, 1)).unwrap();

        cart.remove_item("1").unwrap();
        assert!(cart.remove_item("1").is_err());
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_cart_json_shape() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Bar", Money::from_rupees(100), 2))
            .unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "id": "1", "name": "Bar", "price": 10000, "quantity": 2 }]
            })
        );

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
