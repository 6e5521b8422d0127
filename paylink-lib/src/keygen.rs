//! Placeholder public-key identifier generation.
//!
//! Identifiers are produced by generating a throwaway RSA keypair and
//! base-58 encoding the public modulus bytes. The modulus size is 256 bits,
//! far below any real security margin, and an RSA modulus is not a Solana
//! account key in the first place: the output is an opaque identifier for
//! links and references, not key material. Nothing here signs or persists
//! anything.
//!
//! The random source is an explicit parameter so tests can inject a seeded
//! rng; [`generate_random_public_key`] wraps the process-wide [`OsRng`].
//!
//! # Example
//!
//! ```
//! let key_id = paylink_lib::generate_random_public_key()?;
//! assert!(!key_id.is_empty());
//! # Ok::<(), paylink_lib::KeyGenerationError>(())
//! ```

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

/// Modulus size of the throwaway keypair, in bits.
pub const KEY_ID_BITS: usize = 256;

/// Key generation error types.
#[derive(Debug, thiserror::Error)]
pub enum KeyGenerationError {
    #[error("keypair generation failed: {0}")]
    Generation(#[from] rsa::Error),
}

/// Generate a base-58 key identifier from the process secure random source.
///
/// Equivalent to [`generate_random_public_key_with_rng`] with [`OsRng`].
///
/// # Errors
///
/// Returns [`KeyGenerationError`] when the key-generation primitive fails.
/// Retrying with the same parameters does not resolve a systemic entropy
/// failure; callers should treat this as fatal.
#[cfg_attr(feature = "tracing", tracing::instrument)]
pub fn generate_random_public_key() -> Result<String, KeyGenerationError> {
    generate_random_public_key_with_rng(&mut OsRng)
}

/// Generate a base-58 key identifier from the provided random source.
///
/// Generates a fresh 256-bit RSA keypair, takes the public modulus as
/// unsigned big-endian bytes (leading zero bytes stripped), and encodes
/// them with the Bitcoin base-58 alphabet. The keypair is dropped
/// immediately; only the encoded modulus leaves this function.
///
/// A seeded rng makes the output deterministic:
///
/// ```
/// use paylink_lib::generate_random_public_key_with_rng;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let a = generate_random_public_key_with_rng(&mut StdRng::seed_from_u64(7))?;
/// let b = generate_random_public_key_with_rng(&mut StdRng::seed_from_u64(7))?;
/// assert_eq!(a, b);
/// # Ok::<(), paylink_lib::KeyGenerationError>(())
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip(rng)))]
pub fn generate_random_public_key_with_rng<R>(rng: &mut R) -> Result<String, KeyGenerationError>
where
    R: CryptoRng + RngCore,
{
    let private_key = RsaPrivateKey::new(rng, KEY_ID_BITS)?;
    let modulus = private_key.n().to_bytes_be();
    Ok(bs58::encode(modulus).into_string())
}
