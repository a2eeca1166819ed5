//! Cart Observers

use crate::products::ProductKey;

/// Observer trait for cart change notification.
///
/// The cart has no rendering mechanism of its own; consumers that need to
/// react to mutations (re-render a view, persist state) implement this trait
/// and use the `_with_observer` variants of the cart operations. Every
/// callback has an empty default body, so implementors only override the
/// events they care about.
///
/// When no observer is provided the cart uses a [`NoopObserver`] and the
/// calls are optimized away via monomorphization.
pub trait CartObserver {
    /// Called when a new line is appended to the cart.
    fn on_line_added(&mut self, _product: ProductKey, _quantity: u32) {}

    /// Called when an existing line's quantity changes (merge or replace).
    ///
    /// `quantity` is the new quantity of the line, not the delta.
    fn on_quantity_changed(&mut self, _product: ProductKey, _quantity: u32) {}

    /// Called when a line is removed, including removal via a zero quantity.
    fn on_line_removed(&mut self, _product: ProductKey) {}

    /// Called when the cart is emptied.
    fn on_cleared(&mut self) {}
}

/// No-op observer for unobserved mutations.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {}
