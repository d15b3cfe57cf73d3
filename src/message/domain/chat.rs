//! Ordinary chat messages and their enumerations.

use super::LogicalClock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a chat message carries.
///
/// Codes match the protocol's wire values. Codes this build does not know
/// decode to [`ContentType::UnknownContentType`] so that admission, rather
/// than decoding, decides their fate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Plain text.
    TextPlain,
    /// A sticker referenced by content hash.
    Sticker,
    /// A status update.
    Status,
    /// A bare emoji.
    Emoji,
    /// A transaction command, only ever produced locally.
    TransactionCommand,
    /// System content inside a private group.
    SystemMessageContentPrivateGroup,
    /// An inline image.
    Image,
    /// An inline audio clip.
    Audio,
    /// Unset or unrecognised content.
    #[default]
    #[serde(other)]
    UnknownContentType,
}

impl ContentType {
    /// Maps a wire code onto a content type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgate::message::domain::ContentType;
    ///
    /// assert_eq!(ContentType::from_code(2), ContentType::Sticker);
    /// assert_eq!(ContentType::from_code(99), ContentType::UnknownContentType);
    /// ```
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::TextPlain,
            2 => Self::Sticker,
            3 => Self::Status,
            4 => Self::Emoji,
            5 => Self::TransactionCommand,
            6 => Self::SystemMessageContentPrivateGroup,
            7 => Self::Image,
            8 => Self::Audio,
            _ => Self::UnknownContentType,
        }
    }

    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::UnknownContentType => 0,
            Self::TextPlain => 1,
            Self::Sticker => 2,
            Self::Status => 3,
            Self::Emoji => 4,
            Self::TransactionCommand => 5,
            Self::SystemMessageContentPrivateGroup => 6,
            Self::Image => 7,
            Self::Audio => 8,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UnknownContentType => "UNKNOWN_CONTENT_TYPE",
            Self::TextPlain => "TEXT_PLAIN",
            Self::Sticker => "STICKER",
            Self::Status => "STATUS",
            Self::Emoji => "EMOJI",
            Self::TransactionCommand => "TRANSACTION_COMMAND",
            Self::SystemMessageContentPrivateGroup => "SYSTEM_MESSAGE_CONTENT_PRIVATE_GROUP",
            Self::Image => "IMAGE",
            Self::Audio => "AUDIO",
        };
        f.write_str(label)
    }
}

/// Which kind of chat a message belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    /// Direct message between two users.
    OneToOne,
    /// Public channel.
    PublicGroup,
    /// Private group chat.
    PrivateGroup,
    /// System notice generated inside a private group; never valid from a peer.
    SystemMessagePrivateGroup,
    /// Unset or unrecognised chat kind.
    #[default]
    #[serde(other)]
    UnknownMessageType,
}

impl MessageType {
    /// Maps a wire code onto a message type.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::OneToOne,
            2 => Self::PublicGroup,
            3 => Self::PrivateGroup,
            4 => Self::SystemMessagePrivateGroup,
            _ => Self::UnknownMessageType,
        }
    }

    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::UnknownMessageType => 0,
            Self::OneToOne => 1,
            Self::PublicGroup => 2,
            Self::PrivateGroup => 3,
            Self::SystemMessagePrivateGroup => 4,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UnknownMessageType => "UNKNOWN_MESSAGE_TYPE",
            Self::OneToOne => "ONE_TO_ONE",
            Self::PublicGroup => "PUBLIC_GROUP",
            Self::PrivateGroup => "PRIVATE_GROUP",
            Self::SystemMessagePrivateGroup => "SYSTEM_MESSAGE_PRIVATE_GROUP",
        };
        f.write_str(label)
    }
}

/// Sticker reference inside a chat payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerMessage {
    /// Content hash of the sticker image.
    pub hash: String,
    /// Sticker pack the image belongs to.
    #[serde(default)]
    pub pack: i32,
}

impl StickerMessage {
    /// Creates a sticker reference.
    #[must_use]
    pub fn new(hash: impl Into<String>, pack: i32) -> Self {
        Self {
            hash: hash.into(),
            pack,
        }
    }
}

/// Inline image payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMessage {
    /// Encoded image bytes.
    pub payload: Vec<u8>,
    /// Image format label such as `png`.
    #[serde(default)]
    pub format: String,
}

/// Inline audio payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioMessage {
    /// Encoded audio bytes.
    pub payload: Vec<u8>,
    /// Clip length in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,
}

/// Structured content attached to a chat message. At most one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPayload {
    /// Sticker reference.
    Sticker(StickerMessage),
    /// Inline image.
    Image(ImageMessage),
    /// Inline audio.
    Audio(AudioMessage),
}

/// A message posted to a chat.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{ChatMessage, ContentType, LogicalClock, MessageType};
///
/// let message = ChatMessage::new(LogicalClock::new(5), 5, "c1", "hello");
/// assert_eq!(message.content_type, ContentType::TextPlain);
/// assert_eq!(message.message_type, MessageType::OneToOne);
/// assert!(message.sticker().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Sender's wall-clock time in epoch milliseconds.
    pub timestamp: u64,
    /// Message body.
    pub text: String,
    /// Identifier of the message this one replies to, if any.
    #[serde(default)]
    pub response_to: String,
    /// ENS name the sender signs with, if any.
    #[serde(default)]
    pub ens_name: String,
    /// Chat the message was posted to.
    pub chat_id: String,
    /// Kind of chat.
    #[serde(default)]
    pub message_type: MessageType,
    /// Kind of content.
    #[serde(default)]
    pub content_type: ContentType,
    /// Structured content, when the content type needs one.
    #[serde(default)]
    pub payload: Option<ChatPayload>,
}

impl ChatMessage {
    /// Creates a plain-text one-to-one message.
    #[must_use]
    pub fn new(
        clock: LogicalClock,
        timestamp: u64,
        chat_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            clock,
            timestamp,
            text: text.into(),
            response_to: String::new(),
            ens_name: String::new(),
            chat_id: chat_id.into(),
            message_type: MessageType::OneToOne,
            content_type: ContentType::TextPlain,
            payload: None,
        }
    }

    /// Replaces the message type.
    #[must_use]
    pub const fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Replaces the content type.
    #[must_use]
    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Attaches a structured payload.
    #[must_use]
    pub fn with_payload(mut self, payload: ChatPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Returns the sticker payload, if that is what the message carries.
    #[must_use]
    pub const fn sticker(&self) -> Option<&StickerMessage> {
        match &self.payload {
            Some(ChatPayload::Sticker(sticker)) => Some(sticker),
            _ => None,
        }
    }
}
