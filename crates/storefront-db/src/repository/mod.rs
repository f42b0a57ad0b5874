//! # Repository Module
//!
//! Database repository implementations for the storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Checkout handler ──► db.carts() ──► CartRepository ──► SqlitePool     │
//! │                                                                         │
//! │  Repositories own their SQL; callers only see core types.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`cart::CartRepository`] - Per-user cart storage

pub mod cart;
