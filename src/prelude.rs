//! Tienda prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    checkout::{CheckoutError, OrderLine, checkout_url, order_lines},
    fixtures::{Fixture, FixtureError},
    items::LineItem,
    message::{MessageError, order_message},
    observers::{CartObserver, NoopObserver},
    pricing::{TotalPriceError, total_price, total_quantity},
    products::{Catalog, Product, ProductKey},
    receipt::{ReceiptError, write_summary},
};
