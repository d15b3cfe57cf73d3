//! Domain types for the message subsystem.
//!
//! These are the decoded forms of inbound protocol messages. Decoding itself
//! happens upstream; the types here are plain data, serialisable via serde,
//! and carry no validation of their own.

mod chat;
mod clock;
mod inbound;
mod membership;
mod pairing;
mod transaction;

pub use chat::{
    AudioMessage, ChatMessage, ChatPayload, ContentType, ImageMessage, MessageType,
    StickerMessage,
};
pub use clock::{LogicalClock, ReferenceTimestamp};
pub use inbound::{InboundMessage, MessageKind};
pub use membership::{MembershipEventType, MembershipUpdateEvent, MembershipUpdateMessage};
pub use pairing::PairInstallation;
pub use transaction::{
    AcceptRequestAddressForTransaction, DeclineRequestAddressForTransaction,
    DeclineRequestTransaction, RequestAddressForTransaction, RequestTransaction, SendTransaction,
};
