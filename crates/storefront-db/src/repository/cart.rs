//! # Cart Repository
//!
//! Persists each shopper's cart, keyed by user id.
//!
//! ## Storage Layout
//! ```text
//! carts
//! ┌──────────┬──────────────────────────────────────────────┬────────────┐
//! │ user_id  │ items (JSON, insertion order)                │ updated_at │
//! ├──────────┼──────────────────────────────────────────────┼────────────┤
//! │ user-42  │ [{"id":"1","name":"Bar","price":10000,...}]  │ 2026-...   │
//! └──────────┴──────────────────────────────────────────────┴────────────┘
//! ```
//!
//! A missing row and an empty cart are the same thing: saving an empty cart
//! deletes the row, loading a missing row yields an empty cart.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use storefront_core::validation::validate_user_id;
use storefront_core::{Cart, CartItem};

/// Repository for cart persistence.
///
/// ## Usage
/// ```rust,ignore
/// let carts = db.carts();
///
/// let mut cart = carts.load("user-42").await?;
/// cart.add_item(CartItem::new("1", "Bar", Money::from_rupees(100), 2))?;
/// carts.save("user-42", &cart).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartRepository { pool }
    }

    /// Loads a shopper's cart; empty when nothing is stored.
    ///
    /// Stored lines are replayed through `Cart::add_item`, so a row edited
    /// outside the application cannot yield a cart that breaks cart rules.
    pub async fn load(&self, user_id: &str) -> DbResult<Cart> {
        validate_user_id(user_id)?;

        debug!(user_id = %user_id, "Loading cart");

        let stored: Option<String> =
            sqlx::query_scalar("SELECT items FROM carts WHERE user_id = ?1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(json) = stored else {
            return Ok(Cart::new());
        };

        let items: Vec<CartItem> = serde_json::from_str(&json)?;
        let mut cart = Cart::new();
        for item in items {
            cart.add_item(item)?;
        }

        debug!(user_id = %user_id, items = cart.items().len(), "Cart loaded");
        Ok(cart)
    }

    /// Stores a shopper's cart, replacing what was there.
    pub async fn save(&self, user_id: &str, cart: &Cart) -> DbResult<()> {
        validate_user_id(user_id)?;

        if cart.is_empty() {
            return self.delete(user_id).await;
        }

        debug!(user_id = %user_id, items = cart.items().len(), "Saving cart");

        let items = serde_json::to_string(cart.items())?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO carts (user_id, items, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
                items = excluded.items,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(items)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes a shopper's cart. Removing a missing cart is not an error.
    pub async fn delete(&self, user_id: &str) -> DbResult<()> {
        validate_user_id(user_id)?;

        debug!(user_id = %user_id, "Deleting cart");

        sqlx::query("DELETE FROM carts WHERE user_id = ?1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// When the shopper's cart was last saved, if one is stored.
    pub async fn last_updated(&self, user_id: &str) -> DbResult<Option<DateTime<Utc>>> {
        validate_user_id(user_id)?;

        let updated_at: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT updated_at FROM carts WHERE user_id = ?1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(updated_at)
    }

    /// Counts stored carts (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
