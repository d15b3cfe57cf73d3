//! In-chat transaction commands.
//!
//! These messages negotiate a payment between two chat participants: one
//! side requests an address or a transaction, the other accepts, declines,
//! or reports the sent transaction.

use super::LogicalClock;
use serde::{Deserialize, Serialize};

/// Reports a transaction that was broadcast on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTransaction {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Identifier of the command this transaction settles.
    #[serde(default)]
    pub id: String,
    /// Hash of the broadcast transaction.
    pub transaction_hash: String,
    /// Signature over the transaction hash, absent when the sender omitted it.
    #[serde(default)]
    pub signature: Option<Vec<u8>>,
}

/// Asks the peer for an address to send `value` to.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{LogicalClock, RequestAddressForTransaction};
///
/// let request = RequestAddressForTransaction::new(LogicalClock::new(7), "1.5");
/// assert!(request.contract.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAddressForTransaction {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Decimal amount as sent on the wire.
    pub value: String,
    /// Token contract address; empty for the native asset.
    #[serde(default)]
    pub contract: String,
}

impl RequestAddressForTransaction {
    /// Creates a request for the native asset.
    #[must_use]
    pub fn new(clock: LogicalClock, value: impl Into<String>) -> Self {
        Self {
            clock,
            value: value.into(),
            contract: String::new(),
        }
    }
}

/// Asks the peer to send `value` to `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTransaction {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Destination address.
    pub address: String,
    /// Decimal amount as sent on the wire.
    pub value: String,
    /// Token contract address; empty for the native asset.
    #[serde(default)]
    pub contract: String,
}

/// Accepts an address request by supplying the address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptRequestAddressForTransaction {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Identifier of the request being answered.
    pub id: String,
    /// Address the requester should pay.
    pub address: String,
}

/// Declines an address request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineRequestAddressForTransaction {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Identifier of the request being declined.
    pub id: String,
}

/// Declines a transaction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineRequestTransaction {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Identifier of the request being declined.
    pub id: String,
}
