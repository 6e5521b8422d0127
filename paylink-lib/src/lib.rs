//! Paylink library.
//!
//! This crate intentionally stays stateless: it produces Solana Pay link
//! strings and base-58 key identifiers without talking to a wallet or any
//! blockchain node. Payment detection and settlement belong to the caller.
//!
//! # Features
//!
//! - **Pay Links**: Build and parse `solana:` payment URIs with a fixed
//!   recipient/amount/reference shape
//! - **Key Identifiers**: Generate base-58 encoded placeholder public keys
//!   from a fresh RSA modulus
//! - **Link Lifecycle**: Track a payment link's network, expiration, and
//!   status without any persistence
//!
//! # Example
//!
//! ```
//! use paylink_lib::{create_solana_pay_link, generate_random_public_key};
//!
//! let recipient = generate_random_public_key()?;
//! let reference = generate_random_public_key()?;
//!
//! let uri = create_solana_pay_link(&recipient.into(), &reference.into(), 1.5);
//! assert!(uri.starts_with("solana:"));
//! assert!(uri.contains("amount=1.50"));
//! # Ok::<(), paylink_lib::KeyGenerationError>(())
//! ```

pub mod errors;
pub mod keygen;
pub mod link;
pub mod prelude;
pub mod uri;

pub use errors::PaylinkError;
pub use keygen::{
    generate_random_public_key, generate_random_public_key_with_rng, KeyGenerationError,
};
pub use link::{LinkStatus, Network, PaymentLink};
pub use uri::{create_solana_pay_link, parse_pay_link, ParsedPayLink};

/// Common result alias for paylink operations.
pub type Result<T> = std::result::Result<T, PaylinkError>;

/// Recipient account for a payment link.
///
/// An opaque string wrapper: no format, length, or character-set validation
/// is performed. Characters outside the URI-safe set are embedded into pay
/// links as-is (see [`uri::create_solana_pay_link`]).
///
/// # Example
///
/// ```
/// use paylink_lib::Recipient;
///
/// // Create from &str
/// let recipient: Recipient = "9vHeDRCm6pLEHQXFDSJVjeSvbEPNaHAAMGFBy4QYL3dQ".into();
///
/// // Or explicitly
/// let recipient = Recipient::new("ABC123");
///
/// // Access the inner value
/// assert_eq!(recipient.as_str(), "ABC123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Recipient(pub String);

impl Recipient {
    /// Create a new recipient from a string.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self(recipient.into())
    }

    /// Get the recipient as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Recipient {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Recipient {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference key attached to a payment link.
///
/// The reference is what a payment watcher would search for on-chain to
/// associate a transaction with a link. Like [`Recipient`] it is an opaque
/// string and is never validated or escaped here.
///
/// # Example
///
/// ```
/// use paylink_lib::Reference;
///
/// let reference: Reference = "ref1".into();
/// assert_eq!(reference.as_str(), "ref1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Reference(pub String);

impl Reference {
    /// Create a new reference from a string.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Get the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Reference {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Reference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
