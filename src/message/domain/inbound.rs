//! The closed set of message kinds admitted by the gate.

use super::{
    AcceptRequestAddressForTransaction, ChatMessage, DeclineRequestAddressForTransaction,
    DeclineRequestTransaction, MembershipUpdateMessage, PairInstallation,
    RequestAddressForTransaction, RequestTransaction, SendTransaction,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded inbound message, tagged by kind.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{
///     InboundMessage, LogicalClock, MessageKind, PairInstallation,
/// };
///
/// let message = InboundMessage::from(PairInstallation::new(
///     LogicalClock::new(1),
///     "abc",
///     "mobile",
///     "dev",
/// ));
/// assert_eq!(message.kind(), MessageKind::PairInstallation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Device pairing announcement.
    PairInstallation(PairInstallation),
    /// Report of a sent transaction.
    SendTransaction(SendTransaction),
    /// Request for a payment address.
    RequestAddressForTransaction(RequestAddressForTransaction),
    /// Request for a payment.
    RequestTransaction(RequestTransaction),
    /// Answer to an address request.
    AcceptRequestAddressForTransaction(AcceptRequestAddressForTransaction),
    /// Refusal of an address request.
    DeclineRequestAddressForTransaction(DeclineRequestAddressForTransaction),
    /// Refusal of a payment request.
    DeclineRequestTransaction(DeclineRequestTransaction),
    /// Ordinary chat message.
    ChatMessage(ChatMessage),
    /// Relayed group membership changes.
    MembershipUpdate(MembershipUpdateMessage),
}

impl InboundMessage {
    /// Returns the discriminant of this message.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::PairInstallation(_) => MessageKind::PairInstallation,
            Self::SendTransaction(_) => MessageKind::SendTransaction,
            Self::RequestAddressForTransaction(_) => MessageKind::RequestAddressForTransaction,
            Self::RequestTransaction(_) => MessageKind::RequestTransaction,
            Self::AcceptRequestAddressForTransaction(_) => {
                MessageKind::AcceptRequestAddressForTransaction
            }
            Self::DeclineRequestAddressForTransaction(_) => {
                MessageKind::DeclineRequestAddressForTransaction
            }
            Self::DeclineRequestTransaction(_) => MessageKind::DeclineRequestTransaction,
            Self::ChatMessage(_) => MessageKind::ChatMessage,
            Self::MembershipUpdate(_) => MessageKind::MembershipUpdate,
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for InboundMessage {
                fn from(message: $ty) -> Self {
                    Self::$variant(message)
                }
            }
        )+
    };
}

impl_from_kind!(
    PairInstallation => PairInstallation,
    SendTransaction => SendTransaction,
    RequestAddressForTransaction => RequestAddressForTransaction,
    RequestTransaction => RequestTransaction,
    AcceptRequestAddressForTransaction => AcceptRequestAddressForTransaction,
    DeclineRequestAddressForTransaction => DeclineRequestAddressForTransaction,
    DeclineRequestTransaction => DeclineRequestTransaction,
    ChatMessage => ChatMessage,
    MembershipUpdate => MembershipUpdateMessage,
);

/// Discriminant of [`InboundMessage`], used for routing and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// See [`InboundMessage::PairInstallation`].
    PairInstallation,
    /// See [`InboundMessage::SendTransaction`].
    SendTransaction,
    /// See [`InboundMessage::RequestAddressForTransaction`].
    RequestAddressForTransaction,
    /// See [`InboundMessage::RequestTransaction`].
    RequestTransaction,
    /// See [`InboundMessage::AcceptRequestAddressForTransaction`].
    AcceptRequestAddressForTransaction,
    /// See [`InboundMessage::DeclineRequestAddressForTransaction`].
    DeclineRequestAddressForTransaction,
    /// See [`InboundMessage::DeclineRequestTransaction`].
    DeclineRequestTransaction,
    /// See [`InboundMessage::ChatMessage`].
    ChatMessage,
    /// See [`InboundMessage::MembershipUpdate`].
    MembershipUpdate,
}

impl MessageKind {
    /// Returns `true` for kinds whose clock is checked against the local
    /// current time instead of the transport timestamp.
    #[must_use]
    pub const fn is_relayed(self) -> bool {
        matches!(self, Self::MembershipUpdate)
    }

    /// Returns the stable snake-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PairInstallation => "pair_installation",
            Self::SendTransaction => "send_transaction",
            Self::RequestAddressForTransaction => "request_address_for_transaction",
            Self::RequestTransaction => "request_transaction",
            Self::AcceptRequestAddressForTransaction => "accept_request_address_for_transaction",
            Self::DeclineRequestAddressForTransaction => "decline_request_address_for_transaction",
            Self::DeclineRequestTransaction => "decline_request_transaction",
            Self::ChatMessage => "chat_message",
            Self::MembershipUpdate => "membership_update",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
