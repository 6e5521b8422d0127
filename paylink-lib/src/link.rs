//! Payment link lifecycle.
//!
//! A [`PaymentLink`] records what a payment watcher needs to recognize a
//! settled transfer: recipient, reference key, expected amount, target
//! cluster, and an optional expiration window. The watching itself (RPC
//! polling, transfer validation) is out of scope here; this module only
//! carries the pure state.

use crate::uri::create_solana_pay_link;
use crate::{PaylinkError, Recipient, Reference, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solana cluster a link is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Solana mainnet-beta.
    Mainnet,
    /// Solana testnet.
    Testnet,
    /// Solana devnet.
    Devnet,
}

impl Default for Network {
    fn default() -> Self {
        Self::Mainnet
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Network {
    type Err = PaylinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "devnet" => Ok(Self::Devnet),
            other => Err(PaylinkError::invalid_data(
                "network",
                format!("unknown network: {}", other),
            )),
        }
    }
}

/// Payment link status states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Link has been created but no watcher has picked it up.
    Created,
    /// Link is being watched for a matching transfer.
    Pending,
    /// The full expected amount was received.
    ReceivedTotal,
    /// A transfer was found but for less than the expected amount.
    ReceivedIncomplete,
    /// The expiration window elapsed before a transfer was found.
    Expired,
    /// Watching failed permanently.
    Failed,
}

impl LinkStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ReceivedTotal | Self::ReceivedIncomplete | Self::Expired | Self::Failed
        )
    }
}

/// A payment link and its lifecycle state.
///
/// # Examples
///
/// ```
/// use paylink_lib::{Network, PaymentLink};
///
/// let link = PaymentLink::new(
///     "9vHeDRCm6pLEHQXFDSJVjeSvbEPNaHAAMGFBy4QYL3dQ".into(),
///     "ref1".into(),
///     1.5,
///     Network::Devnet,
/// )?
/// .with_expiration(30);
///
/// assert!(link.uri().ends_with("amount=1.50&reference=ref1"));
/// # Ok::<(), paylink_lib::PaylinkError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Recipient account.
    pub recipient: Recipient,
    /// Reference key a watcher searches for.
    pub reference: Reference,
    /// Expected amount.
    pub amount: f64,
    /// Target cluster.
    pub network: Network,
    /// Current lifecycle state.
    pub status: LinkStatus,
    /// Expiration window in minutes; 0 or negative means the link never
    /// expires.
    pub expiration_minutes: i64,
    /// Timestamp when the link was created.
    pub created_at: DateTime<Utc>,
    /// Amount actually received, once known.
    pub amount_received: Option<f64>,
}

impl PaymentLink {
    /// Create a new link in the `Created` state.
    ///
    /// # Errors
    ///
    /// Rejects non-finite and negative amounts with `InvalidData`. The raw
    /// [`create_solana_pay_link`] builder stays total; this constructor is
    /// the validating boundary.
    pub fn new(
        recipient: Recipient,
        reference: Reference,
        amount: f64,
        network: Network,
    ) -> Result<Self> {
        if !amount.is_finite() {
            return Err(PaylinkError::invalid_data(
                "amount",
                "must be a finite number",
            ));
        }
        if amount < 0.0 {
            return Err(PaylinkError::invalid_data("amount", "must not be negative"));
        }

        Ok(Self {
            recipient,
            reference,
            amount,
            network,
            status: LinkStatus::Created,
            expiration_minutes: 0,
            created_at: Utc::now(),
            amount_received: None,
        })
    }

    /// Set the expiration window in minutes.
    pub fn with_expiration(mut self, minutes: i64) -> Self {
        self.expiration_minutes = minutes;
        self
    }

    /// Render the link as a Solana Pay URI.
    pub fn uri(&self) -> String {
        create_solana_pay_link(&self.recipient, &self.reference, self.amount)
    }

    /// Check whether the expiration window has elapsed at `now`.
    ///
    /// Expiration is minute-granular: the link expires once the whole
    /// minutes between `created_at` and `now` reach `expiration_minutes`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.expiration_minutes <= 0 {
            return false;
        }
        let elapsed_minutes = (now - self.created_at).num_minutes().abs();
        elapsed_minutes >= self.expiration_minutes
    }

    /// Mark the link as picked up by a watcher.
    pub fn mark_pending(&mut self) {
        self.status = LinkStatus::Pending;
    }

    /// Record a received transfer.
    ///
    /// The full expected amount settles the link as `ReceivedTotal`; a
    /// short transfer as `ReceivedIncomplete`.
    pub fn mark_received(&mut self, amount: f64) {
        self.amount_received = Some(amount);
        self.status = if amount >= self.amount {
            LinkStatus::ReceivedTotal
        } else {
            LinkStatus::ReceivedIncomplete
        };
    }

    /// Mark the link as expired.
    pub fn mark_expired(&mut self) {
        self.status = LinkStatus::Expired;
    }

    /// Mark the link as permanently failed.
    pub fn mark_failed(&mut self) {
        self.status = LinkStatus::Failed;
    }

    /// Serialize the link to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Deserialize a link from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_link() -> PaymentLink {
        PaymentLink::new("ABC123".into(), "ref1".into(), 1.5, Network::Devnet).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_amounts() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01] {
            let result = PaymentLink::new("A".into(), "r".into(), bad, Network::Mainnet);
            assert!(result.is_err(), "amount {} should be rejected", bad);
        }
    }

    #[test]
    fn test_new_link_state() {
        let link = test_link();
        assert_eq!(link.status, LinkStatus::Created);
        assert_eq!(link.expiration_minutes, 0);
        assert!(link.amount_received.is_none());
    }

    #[test]
    fn test_uri_delegates_to_builder() {
        let link = test_link();
        assert_eq!(link.uri(), "solana:ABC123?amount=1.50&reference=ref1");
    }

    #[test]
    fn test_zero_expiration_never_expires() {
        let link = test_link();
        let far_future = link.created_at + Duration::days(365);
        assert!(!link.is_expired(far_future));
    }

    #[test]
    fn test_expiration_minute_boundary() {
        let link = test_link().with_expiration(30);
        let just_before = link.created_at + Duration::minutes(29) + Duration::seconds(59);
        let at_boundary = link.created_at + Duration::minutes(30);

        assert!(!link.is_expired(just_before));
        assert!(link.is_expired(at_boundary));
    }

    #[test]
    fn test_mark_received_total_and_incomplete() {
        let mut link = test_link();
        link.mark_pending();
        assert_eq!(link.status, LinkStatus::Pending);

        link.mark_received(1.5);
        assert_eq!(link.status, LinkStatus::ReceivedTotal);
        assert_eq!(link.amount_received, Some(1.5));

        let mut short = test_link();
        short.mark_received(1.0);
        assert_eq!(short.status, LinkStatus::ReceivedIncomplete);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!LinkStatus::Created.is_terminal());
        assert!(!LinkStatus::Pending.is_terminal());
        assert!(LinkStatus::ReceivedTotal.is_terminal());
        assert!(LinkStatus::ReceivedIncomplete.is_terminal());
        assert!(LinkStatus::Expired.is_terminal());
        assert!(LinkStatus::Failed.is_terminal());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&LinkStatus::ReceivedTotal).unwrap();
        assert_eq!(json, "\"received_total\"");
        let json = serde_json::to_string(&LinkStatus::ReceivedIncomplete).unwrap();
        assert_eq!(json, "\"received_incomplete\"");
    }

    #[test]
    fn test_network_round_trip() {
        for (name, network) in [
            ("mainnet", Network::Mainnet),
            ("testnet", Network::Testnet),
            ("devnet", Network::Devnet),
        ] {
            assert_eq!(name.parse::<Network>().unwrap(), network);
            assert_eq!(network.to_string(), name);
        }

        assert!("regtest".parse::<Network>().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut link = test_link().with_expiration(15);
        link.mark_received(1.5);

        let json = link.to_json().unwrap();
        let restored = PaymentLink::from_json(&json).unwrap();

        assert_eq!(restored.recipient, link.recipient);
        assert_eq!(restored.reference, link.reference);
        assert_eq!(restored.status, LinkStatus::ReceivedTotal);
        assert_eq!(restored.expiration_minutes, 15);
        assert_eq!(restored.created_at, link.created_at);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(PaymentLink::from_json("not json").is_err());
    }
}
