//! Integration tests for cart mutation semantics and derived totals.
//!
//! Exercises the documented cart contract end to end: merge on repeated adds,
//! idempotent removal, replace-style quantity updates, and totals that always
//! match a live recomputation from the catalog.

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use tienda::{
    cart::Cart,
    items::LineItem,
    products::{Catalog, Product, ProductKey},
};

fn catalog_ab<'a>() -> (Catalog<'a>, ProductKey, ProductKey) {
    let mut catalog = Catalog::with_key();

    let a = catalog.insert(Product {
        sku: "A".to_string(),
        name: "Product A".to_string(),
        price: Money::from_minor(1000, GBP),
        in_stock: true,
        images: Vec::new(),
    });

    let b = catalog.insert(Product {
        sku: "B".to_string(),
        name: "Product B".to_string(),
        price: Money::from_minor(500, GBP),
        in_stock: true,
        images: Vec::new(),
    });

    (catalog, a, b)
}

#[test]
fn single_add_yields_expected_totals() -> TestResult {
    let (catalog, a, _b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 2)?;

    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(&catalog)?, Money::from_minor(2000, GBP));

    Ok(())
}

#[test]
fn repeated_add_merges_into_one_line() -> TestResult {
    let (catalog, a, _b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 2)?;
    cart.add(&catalog, a, 3)?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.line(a).map(LineItem::quantity), Some(5));
    assert_eq!(cart.total_price(&catalog)?, Money::from_minor(5000, GBP));

    Ok(())
}

#[test]
fn two_products_sum_across_lines() -> TestResult {
    let (catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 1)?;
    cart.add(&catalog, b, 4)?;

    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(&catalog)?, Money::from_minor(3000, GBP));

    Ok(())
}

#[test]
fn zero_quantity_set_removes_the_line() -> TestResult {
    let (catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 1)?;
    cart.add(&catalog, b, 4)?;

    cart.set_quantity(&catalog, a, 0)?;

    assert!(cart.line(a).is_none());
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_price(&catalog)?, Money::from_minor(2000, GBP));

    Ok(())
}

#[test]
fn removing_a_nonexistent_product_changes_nothing() -> TestResult {
    let (catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 1)?;
    cart.add(&catalog, b, 4)?;

    cart.remove(ProductKey::default());

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(&catalog)?, Money::from_minor(3000, GBP));

    Ok(())
}

#[test]
fn clear_resets_all_derived_queries() -> TestResult {
    let (catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 1)?;
    cart.add(&catalog, b, 4)?;

    cart.clear();

    assert_eq!(cart.len(), 0);
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(&catalog)?, Money::from_minor(0, GBP));

    Ok(())
}

#[test]
fn distinct_product_count_never_exceeds_products_added() -> TestResult {
    let (catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);

    for _ in 0..4 {
        cart.add(&catalog, a, 1)?;
        cart.add(&catalog, b, 2)?;
    }

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_items(), 12);

    Ok(())
}

#[test]
fn removal_twice_equals_removal_once() -> TestResult {
    let (catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 2)?;
    cart.add(&catalog, b, 1)?;

    cart.remove(a);
    let after_once: Vec<(ProductKey, u32)> = cart
        .iter()
        .map(|line| (line.product(), line.quantity()))
        .collect();

    cart.remove(a);
    let after_twice: Vec<(ProductKey, u32)> = cart
        .iter()
        .map(|line| (line.product(), line.quantity()))
        .collect();

    assert_eq!(after_once, after_twice);

    Ok(())
}

#[test]
fn total_always_equals_live_recomputation() -> TestResult {
    let (mut catalog, a, b) = catalog_ab();

    let mut cart = Cart::new(GBP);
    cart.add(&catalog, a, 2)?;
    cart.add(&catalog, b, 3)?;

    // A mid-session price change is reflected immediately.
    if let Some(entry) = catalog.get_mut(b) {
        entry.price = Money::from_minor(700, GBP);
    }

    let recomputed: i64 = cart
        .iter()
        .map(|line| {
            catalog
                .get(line.product())
                .map(|product| product.price.to_minor_units() * i64::from(line.quantity()))
                .unwrap_or_default()
        })
        .sum();

    assert_eq!(cart.total_price(&catalog)?.to_minor_units(), recomputed);
    assert_eq!(recomputed, 4100);

    Ok(())
}
