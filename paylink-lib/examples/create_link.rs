//! Payment Link Example
//!
//! This example demonstrates the full link flow:
//! - Generate recipient and reference identifiers
//! - Build a payment link with an expiration window
//! - Parse the URI back into its parts
//!
//! # Usage
//!
//! ```bash
//! cargo run --example create_link
//! ```

use paylink_lib::prelude::*;

fn main() -> Result<()> {
    let recipient: Recipient = generate_random_public_key()?.into();
    let reference: Reference = generate_random_public_key()?.into();

    let link = PaymentLink::new(recipient, reference, 1.5, Network::Devnet)?.with_expiration(30);

    let uri = link.uri();
    println!("network:   {}", link.network);
    println!("pay link:  {}", uri);

    let parsed = parse_pay_link(&uri)?;
    println!("recipient: {}", parsed.recipient);
    println!("amount:    {}", parsed.amount);
    println!("reference: {}", parsed.reference);

    Ok(())
}
