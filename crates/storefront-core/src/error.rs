//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── PromoRejection   - Why a promo code gives no discount             │
//! │                                                                         │
//! │  storefront-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → caller                  │
//! │        PromoRejection  → PromoResult { valid: false, message }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, limits)
//! 3. Errors are enum variants, never String
//! 4. `PromoRejection` messages are shown to shoppers verbatim

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
///
/// Raised by the cart mutation operations; the promo engine never returns these.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line in the cart has the given item id.
    #[error("Item not in cart: {0}")]
    ItemNotFound(String),

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity would exceed the per-item maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Promo Rejection
// =============================================================================

/// Reasons a promo code yields no discount.
///
/// These are business outcomes, not failures: the checkout keeps working
/// with the undiscounted total. `Display` is the shopper-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoRejection {
    /// Nothing was typed (or only whitespace).
    #[error("Enter a promo code")]
    EmptyCode,

    /// The cart has no lines to discount.
    #[error("Add items first")]
    EmptyCart,

    /// The code is not in the promo registry.
    #[error("Invalid code")]
    UnknownCode,

    /// The code is known but the cart does not meet its minimum subtotal.
    #[error("Requires {required} subtotal")]
    UnmetMinimum { required: Money },

    /// The code is registered but has no pricing rule behind it.
    #[error("Unsupported code")]
    Unsupported,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1200 exceeds maximum allowed (999)");

        let err = CoreError::ItemNotFound("sku-1".to_string());
        assert_eq!(err.to_string(), "Item not in cart: sku-1");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_promo_rejection_messages() {
        assert_eq!(PromoRejection::EmptyCode.to_string(), "Enter a promo code");
        assert_eq!(PromoRejection::EmptyCart.to_string(), "Add items first");
        assert_eq!(PromoRejection::UnknownCode.to_string(), "Invalid code");
        assert_eq!(PromoRejection::Unsupported.to_string(), "Unsupported code");
        assert_eq!(
            PromoRejection::UnmetMinimum {
                required: Money::from_rupees(250)
            }
            .to_string(),
            "Requires ₹250 subtotal"
        );
    }
}
