//! Prelude module for convenient imports.
//!
//! Import everything with:
//!
//! ```rust,ignore
//! use paylink_lib::prelude::*;
//! ```

// Core types
pub use crate::{Recipient, Reference};

// Error handling
pub use crate::errors::PaylinkError;
pub use crate::Result;

// Key identifiers
pub use crate::keygen::{
    generate_random_public_key, generate_random_public_key_with_rng, KeyGenerationError,
};

// Pay links
pub use crate::link::{LinkStatus, Network, PaymentLink};
pub use crate::uri::{create_solana_pay_link, parse_pay_link, ParsedPayLink};
