//! # Validation Module
//!
//! Input validation for cart lines and cart owners.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  └── Quantity steppers, disabled buttons                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart mutation (Rust)                                         │
//! │  └── THIS MODULE: id, name, price, quantity, cart size                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartStore (SQLite)                                           │
//! │  └── user_id PRIMARY KEY, NOT NULL columns                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The promo engine does not go through this module: it accepts any cart
//! snapshot and reports problems as rejected results instead of errors.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_item_id, validate_quantity};
//!
//! validate_item_id("choco-bar").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a cart item id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 64 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_item_id;
///
/// assert!(validate_item_id("sku-42").is_ok());
/// assert!(validate_item_id("  ").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    validate_required_text("id", id, 64)
}

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, 200)
}

/// Validates the identity a cart is stored under.
///
/// ## Rules
/// - Must not be empty
/// - At most 128 characters
pub fn validate_user_id(user_id: &str) -> ValidationResult<()> {
    validate_required_text("user_id", user_id, 128)
}

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// Shopper sets quantity: 5
///      │
///      ▼
/// validate_quantity(5) ← THIS FUNCTION
///      │
///      ├── qty == 0?   → Error: "quantity must be positive"
///      ├── qty > 999?  → Error: "quantity must be between 1 and 999"
///      └── OK          → Cart::add_item
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free samples)
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_rupees(99)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_paise(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more distinct line fits in the cart.
///
/// ## Rules
/// - Must not exceed MAX_CART_ITEMS (100)
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
