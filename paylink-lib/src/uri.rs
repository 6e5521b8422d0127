//! Solana Pay link building and parsing.
//!
//! A pay link has the exact shape
//! `solana:<recipient>?amount=<amount>&reference=<reference>` with the
//! amount carrying two fraction digits. No other parameters are emitted
//! (the wider protocol's `label`, `message`, and `spl-token` are out of
//! scope) and no percent-encoding is applied in either direction:
//! recipient and reference are embedded verbatim, so URI-safety of those
//! values is the caller's responsibility.
//!
//! # Examples
//!
//! ```
//! use paylink_lib::uri::{create_solana_pay_link, parse_pay_link};
//!
//! let uri = create_solana_pay_link(&"ABC123".into(), &"ref1".into(), 1.5);
//! assert_eq!(uri, "solana:ABC123?amount=1.50&reference=ref1");
//!
//! let parsed = parse_pay_link(&uri)?;
//! assert_eq!(parsed.recipient.as_str(), "ABC123");
//! assert_eq!(parsed.amount, "1.50");
//! assert_eq!(parsed.reference.as_str(), "ref1");
//! # Ok::<(), paylink_lib::PaylinkError>(())
//! ```

use crate::{PaylinkError, Recipient, Reference, Result};

/// A pay link broken back into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPayLink {
    /// The recipient account string, verbatim.
    pub recipient: Recipient,
    /// The amount field as literal text, precision preserved.
    pub amount: String,
    /// The reference key string, verbatim.
    pub reference: Reference,
}

/// Build a Solana Pay link string.
///
/// The amount is formatted to exactly two fraction digits by rounding the
/// binary value to the nearest decimal; `2.345` (whose nearest f64 lies
/// below 2.345) formats as `"2.34"`. The function is total: non-finite
/// amounts produce `amount=NaN`, `amount=inf`, or `amount=-inf`, and
/// negative amounts are formatted as-is. Callers that need to reject such
/// values should do so before building the link (see
/// [`crate::PaymentLink::new`]).
///
/// Repeated calls with identical inputs return the identical string.
///
/// # Examples
///
/// ```
/// use paylink_lib::create_solana_pay_link;
///
/// let uri = create_solana_pay_link(&"X".into(), &"Y".into(), 0.0);
/// assert_eq!(uri, "solana:X?amount=0.00&reference=Y");
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument)]
pub fn create_solana_pay_link(recipient: &Recipient, reference: &Reference, amount: f64) -> String {
    format!(
        "solana:{}?amount={:.2}&reference={}",
        recipient, amount, reference
    )
}

/// Parse a Solana Pay link string.
///
/// Accepts the `solana:` scheme only. Query parameters other than `amount`
/// and `reference` are ignored; both of those are required. Values are
/// taken verbatim, with no percent-decoding, mirroring the builder.
///
/// # Errors
///
/// Returns an error for a foreign scheme, an empty recipient, or a missing
/// `amount` or `reference` parameter.
pub fn parse_pay_link(uri: &str) -> Result<ParsedPayLink> {
    let uri = uri.trim();

    let rest = uri
        .strip_prefix("solana:")
        .ok_or_else(|| PaylinkError::uri(format!("unrecognized URI scheme: {}", uri)))?;

    let (recipient, query) = match rest.split_once('?') {
        Some((recipient, query)) => (recipient, query),
        None => (rest, ""),
    };

    if recipient.is_empty() {
        return Err(PaylinkError::uri("empty recipient in solana: URI"));
    }

    let mut amount = None;
    let mut reference = None;

    for param in query.split('&') {
        if let Some((key, value)) = param.split_once('=') {
            match key {
                "amount" => amount = Some(value.to_string()),
                "reference" => reference = Some(value.to_string()),
                _ => {
                    // Ignore unknown parameters
                }
            }
        }
    }

    let amount =
        amount.ok_or_else(|| PaylinkError::uri("missing 'amount' in solana: URI"))?;
    let reference =
        reference.ok_or_else(|| PaylinkError::uri("missing 'reference' in solana: URI"))?;

    Ok(ParsedPayLink {
        recipient: recipient.into(),
        amount,
        reference: reference.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pay_link_exact_format() {
        let uri = create_solana_pay_link(&"ABC123".into(), &"ref1".into(), 1.5);
        assert_eq!(uri, "solana:ABC123?amount=1.50&reference=ref1");
    }

    #[test]
    fn test_zero_amount() {
        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), 0.0);
        assert_eq!(uri, "solana:X?amount=0.00&reference=Y");
    }

    #[test]
    fn test_amount_rounding_contract() {
        // 2.345 has no exact f64 representation; the nearest value lies
        // below it, so two-digit formatting yields 2.34.
        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), 2.345);
        assert_eq!(uri, "solana:X?amount=2.34&reference=Y");

        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), 2.675);
        assert_eq!(uri, "solana:X?amount=2.67&reference=Y");
    }

    #[test]
    fn test_idempotence() {
        let first = create_solana_pay_link(&"ABC123".into(), &"ref1".into(), 1.5);
        let second = create_solana_pay_link(&"ABC123".into(), &"ref1".into(), 1.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_finite_and_negative_amounts() {
        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), f64::NAN);
        assert_eq!(uri, "solana:X?amount=NaN&reference=Y");

        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), f64::INFINITY);
        assert_eq!(uri, "solana:X?amount=inf&reference=Y");

        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), f64::NEG_INFINITY);
        assert_eq!(uri, "solana:X?amount=-inf&reference=Y");

        let uri = create_solana_pay_link(&"X".into(), &"Y".into(), -1.5);
        assert_eq!(uri, "solana:X?amount=-1.50&reference=Y");
    }

    #[test]
    fn test_no_percent_encoding() {
        let uri = create_solana_pay_link(&"a b&c".into(), &"r/1".into(), 1.0);
        assert_eq!(uri, "solana:a b&c?amount=1.00&reference=r/1");
    }

    #[test]
    fn test_parse_round_trip() {
        let uri = create_solana_pay_link(&"ABC123".into(), &"ref1".into(), 1.5);
        let parsed = parse_pay_link(&uri).unwrap();
        assert_eq!(parsed.recipient.as_str(), "ABC123");
        assert_eq!(parsed.amount, "1.50");
        assert_eq!(parsed.reference.as_str(), "ref1");
    }

    #[test]
    fn test_parse_ignores_unknown_parameters() {
        let parsed =
            parse_pay_link("solana:ABC?amount=1.00&label=shop&reference=ref1").unwrap();
        assert_eq!(parsed.amount, "1.00");
        assert_eq!(parsed.reference.as_str(), "ref1");
    }

    #[test]
    fn test_parse_missing_parameters() {
        assert!(parse_pay_link("solana:ABC?amount=1.00").is_err());
        assert!(parse_pay_link("solana:ABC?reference=ref1").is_err());
        assert!(parse_pay_link("solana:ABC").is_err());
    }

    #[test]
    fn test_parse_rejects_foreign_schemes() {
        assert!(parse_pay_link("bitcoin:bc1qabc?amount=1.00&reference=r").is_err());
        assert!(parse_pay_link("").is_err());
    }

    #[test]
    fn test_parse_empty_recipient() {
        assert!(parse_pay_link("solana:?amount=1.00&reference=r").is_err());
    }
}
