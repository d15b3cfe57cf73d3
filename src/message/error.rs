//! Error types for inbound message validation.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Every
//! [`ValidationError`] maps onto one [`ValidationErrorKind`] so callers can
//! branch on the kind of failure without matching on display strings.

use super::domain::{ContentType, LogicalClock, MessageType, ReferenceTimestamp};
use std::{fmt, num::ParseFloatError};
use thiserror::Error;

/// Errors raised by the logical clock checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The clock was never set.
    #[error("clock can't be 0")]
    ZeroClock,

    /// The clock is too far from the reference timestamp.
    #[error(
        "clock value can't be too different from transport timestamp: \
         clock {clock}, reference {reference}, drift {drift_ms}ms exceeds {max_drift_ms}ms"
    )]
    ExcessiveDrift {
        /// The message's clock.
        clock: LogicalClock,
        /// The timestamp it was compared against.
        reference: ReferenceTimestamp,
        /// Absolute distance between the two.
        drift_ms: u64,
        /// Allowed distance.
        max_drift_ms: u64,
    },
}

/// String fields that must be present on an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageField {
    /// Device name of a pairing announcement.
    Name,
    /// Device class of a pairing announcement.
    DeviceType,
    /// Installation identifier of a pairing announcement.
    InstallationId,
    /// Hash of a sent transaction.
    TransactionHash,
    /// Amount of a transaction request.
    Value,
    /// Address of a transaction request or answer.
    Address,
    /// Identifier of the request being answered.
    MessageId,
    /// Body of a chat message.
    Text,
    /// Chat a message was posted to.
    ChatId,
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::DeviceType => "device type",
            Self::InstallationId => "installationId",
            Self::TransactionHash => "transaction hash",
            Self::Value => "value",
            Self::Address => "address",
            Self::MessageId => "messageID",
            Self::Text => "text",
            Self::ChatId => "chatId",
        };
        f.write_str(label)
    }
}

/// Nested structures that must be present on an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MissingPayload {
    /// A sent transaction carried no signature.
    #[error("signature can't be nil")]
    Signature,
    /// A sticker message had no payload, or a payload that is not a sticker.
    #[error("no sticker content")]
    StickerContent,
    /// The sticker payload had an empty content hash.
    #[error("sticker hash not set")]
    StickerHash,
}

/// Enumerated values a peer is not allowed to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EnumViolation {
    /// The content type was unset or unrecognised.
    #[error("unknown content type")]
    UnknownContentType(ContentType),
    /// Transaction commands are only ever produced locally.
    #[error("can't receive request address for transaction from others")]
    TransactionCommandFromPeer,
    /// The message type was unset or unrecognised.
    #[error("unknown message type")]
    UnknownMessageType(MessageType),
    /// Private-group system messages cannot arrive as ordinary chat.
    #[error("unknown message type: private group system messages can't be received as chat")]
    PrivateGroupSystemMessage,
}

/// Why a numeric field failed to parse as a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The text is not a decimal number.
    #[error(transparent)]
    Malformed(#[from] ParseFloatError),
    /// The number is well formed but beyond the range of an `f64`.
    #[error("value out of range")]
    OutOfRange,
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The logical clock is 0.
    ZeroClock,
    /// The logical clock is too far from the reference timestamp.
    ExcessiveDrift,
    /// A required field is blank or empty.
    EmptyField,
    /// A required nested structure is absent.
    MissingPayload,
    /// An enumerated value is unknown or disallowed.
    InvalidEnum,
    /// A numeric string failed to parse.
    ParseError,
}

/// Errors that reject an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The clock check failed.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// A required string field is blank or empty.
    #[error("{0} can't be empty")]
    EmptyField(MessageField),

    /// A chat message's sender timestamp was never set.
    #[error("timestamp can't be 0")]
    ZeroTimestamp,

    /// A required nested structure is absent.
    #[error(transparent)]
    MissingPayload(#[from] MissingPayload),

    /// An enumerated value is unknown or disallowed.
    #[error(transparent)]
    InvalidEnum(#[from] EnumViolation),

    /// A numeric field failed to parse as a decimal number.
    #[error("invalid {field}: {source}")]
    Parse {
        /// The field that failed to parse.
        field: MessageField,
        /// The underlying parse failure.
        #[source]
        source: DecimalError,
    },
}

impl ValidationError {
    /// Creates a parse error for `field`.
    #[must_use]
    pub const fn parse(field: MessageField, source: DecimalError) -> Self {
        Self::Parse { field, source }
    }

    /// Returns the classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgate::message::error::{MessageField, ValidationError, ValidationErrorKind};
    ///
    /// let error = ValidationError::EmptyField(MessageField::Text);
    /// assert_eq!(error.kind(), ValidationErrorKind::EmptyField);
    /// assert_eq!(error.to_string(), "text can't be empty");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::Clock(ClockError::ZeroClock) => ValidationErrorKind::ZeroClock,
            Self::Clock(ClockError::ExcessiveDrift { .. }) => ValidationErrorKind::ExcessiveDrift,
            Self::EmptyField(_) | Self::ZeroTimestamp => ValidationErrorKind::EmptyField,
            Self::MissingPayload(_) => ValidationErrorKind::MissingPayload,
            Self::InvalidEnum(_) => ValidationErrorKind::InvalidEnum,
            Self::Parse { .. } => ValidationErrorKind::ParseError,
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ZeroClock => "zero_clock",
            Self::ExcessiveDrift => "excessive_drift",
            Self::EmptyField => "empty_field",
            Self::MissingPayload => "missing_payload",
            Self::InvalidEnum => "invalid_enum",
            Self::ParseError => "parse_error",
        };
        f.write_str(label)
    }
}
