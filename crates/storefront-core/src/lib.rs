//! # storefront-core: Pure Pricing Logic for the Storefront
//!
//! Cart math and promo code evaluation as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Checkout UI / HTTP handlers (outside this workspace)     │   │
//! │  │    Cart page ──► Promo input ──► Checkout ──► Payment gateway   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   promo   │  │ checkout  │  │   │
//! │  │   │   Cart    │  │   Money   │  │  engine   │  │  summary  │  │   │
//! │  │   │ CartItem  │  │  (paise)  │  │ registry  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                storefront-db (CartStore)                        │   │
//! │  │              SQLite carts keyed by user id                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart and CartItem with their mutation rules
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`promo`] - Promo registry and evaluation engine
//! - [`checkout`] - Subtotal, discount, delivery and total
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::promo::evaluate_promo;
//! use storefront_core::{CartItem, Money};
//!
//! let cart = vec![
//!     CartItem::new("1", "A", Money::from_rupees(100), 2),
//!     CartItem::new("2", "B", Money::from_rupees(50), 1),
//! ];
//!
//! let result = evaluate_promo("b2g1", &cart);
//! assert!(result.valid);
//! assert_eq!(result.discount, Money::from_rupees(50));
//! assert_eq!(result.message, "Buy 2 Get 1 applied (₹50 off)");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod promo;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::CheckoutSummary;
pub use error::{CoreError, CoreResult, PromoRejection, ValidationError};
pub use money::Money;
pub use promo::{evaluate_promo, PromoEngine, PromoResult};
pub use types::{Cart, CartItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
///
/// Guards against typos such as 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: u32 = 999;
