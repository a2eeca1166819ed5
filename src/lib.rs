//! Tienda
//!
//! Tienda is the cart and checkout handoff core of a small storefront: an in-memory
//! cart with merge semantics, live price totals, and order message generation for a
//! pre-filled messaging-app checkout link.

pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod items;
pub mod message;
pub mod observers;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod utils;
