//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct DemoCheckoutArgs {
    /// Fixture set to use for the catalog & cart
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Destination phone number for the checkout link
    #[clap(short, long)]
    pub phone: Option<String>,
}
