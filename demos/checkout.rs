//! Checkout Example
//!
//! Loads a fixture set, prints the cart as a table, then prints the order
//! message and (when a phone number is given) the pre-filled checkout link.
//!
//! Use `-f` to load a fixture set by name
//! Use `-p` to supply a destination phone number

use std::io;

use anyhow::Result;

use clap::Parser;
use tienda::{
    checkout::checkout_url, fixtures::Fixture, message::order_message, receipt::write_summary,
    utils::DemoCheckoutArgs,
};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoCheckoutArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let cart = fixture.cart()?;
    let catalog = fixture.catalog();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_summary(&mut handle, &cart, catalog)?;

    let message = order_message(&cart, catalog)?;
    println!("\n{message}");

    if let Some(phone) = args.phone.as_deref() {
        println!("\n{}", checkout_url(phone, &message)?);
    }

    Ok(())
}
