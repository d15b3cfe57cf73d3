//! Per-kind validation rules.
//!
//! Each rule is a pure function over one decoded message kind. Rules run
//! the clock check first, then the kind's field checks in a fixed order,
//! and return the first failure.

use crate::message::{
    domain::{
        AcceptRequestAddressForTransaction, ChatMessage, ContentType,
        DeclineRequestAddressForTransaction, DeclineRequestTransaction, LogicalClock,
        MembershipUpdateMessage, MessageType, PairInstallation, ReferenceTimestamp,
        RequestAddressForTransaction, RequestTransaction, SendTransaction,
    },
    error::{DecimalError, EnumViolation, MessageField, MissingPayload, ValidationError},
    ports::validator::{ValidationConfig, ValidationResult},
    validation::clock,
};

/// Validates a device pairing announcement.
///
/// # Errors
///
/// Returns a clock error, or `EmptyField` for a blank name, device type or
/// installation id (checked in that order).
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{LogicalClock, PairInstallation, ReferenceTimestamp};
/// use chatgate::message::ports::validator::ValidationConfig;
/// use chatgate::message::validation::rules::validate_pair_installation;
///
/// let now = 1_700_000_000_000;
/// let pairing = PairInstallation::new(LogicalClock::new(now), "abc", "mobile", "dev");
/// let result = validate_pair_installation(
///     &pairing,
///     ReferenceTimestamp::from_millis(now),
///     &ValidationConfig::default(),
/// );
/// assert!(result.is_ok());
/// ```
pub fn validate_pair_installation(
    message: &PairInstallation,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_blank(&message.name, MessageField::Name)?;
    require_non_blank(&message.device_type, MessageField::DeviceType)?;
    require_non_blank(&message.installation_id, MessageField::InstallationId)
}

/// Validates a sent-transaction report.
///
/// # Errors
///
/// Returns a clock error, `EmptyField` for a blank transaction hash, or
/// `MissingPayload` if the signature is absent.
pub fn validate_send_transaction(
    message: &SendTransaction,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_blank(&message.transaction_hash, MessageField::TransactionHash)?;
    if message.signature.is_none() {
        return Err(MissingPayload::Signature.into());
    }
    Ok(())
}

/// Validates a request for a payment address.
///
/// # Errors
///
/// Returns a clock error, `EmptyField` for a blank value, or `Parse` if the
/// value is not a decimal number.
pub fn validate_request_address_for_transaction(
    message: &RequestAddressForTransaction,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_blank(&message.value, MessageField::Value)?;
    require_decimal(&message.value, MessageField::Value)
}

/// Validates a request for a payment.
///
/// # Errors
///
/// Returns a clock error, `EmptyField` for a blank value or address, or
/// `Parse` if the value is not a decimal number. Both emptiness checks run
/// before the value is parsed.
pub fn validate_request_transaction(
    message: &RequestTransaction,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_blank(&message.value, MessageField::Value)?;
    require_non_blank(&message.address, MessageField::Address)?;
    require_decimal(&message.value, MessageField::Value)
}

/// Validates an accepted address request.
///
/// # Errors
///
/// Returns a clock error, or `EmptyField` for an empty id or blank address.
pub fn validate_accept_request_address_for_transaction(
    message: &AcceptRequestAddressForTransaction,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_empty(&message.id, MessageField::MessageId)?;
    require_non_blank(&message.address, MessageField::Address)
}

/// Validates a declined address request.
///
/// # Errors
///
/// Returns a clock error, or `EmptyField` for an empty id.
pub fn validate_decline_request_address_for_transaction(
    message: &DeclineRequestAddressForTransaction,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_empty(&message.id, MessageField::MessageId)
}

/// Validates a declined payment request.
///
/// # Errors
///
/// Returns a clock error, or `EmptyField` for an empty id.
pub fn validate_decline_request_transaction(
    message: &DeclineRequestTransaction,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;
    require_non_empty(&message.id, MessageField::MessageId)
}

/// Validates an ordinary chat message.
///
/// Checks, in order: clock, sender timestamp, text, chat id, content type,
/// message type, and for stickers the payload, sticker and sticker hash.
///
/// # Errors
///
/// Returns the first failing check's [`ValidationError`].
pub fn validate_chat_message(
    message: &ChatMessage,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    check_clock(message.clock, reference, config)?;

    if message.timestamp == 0 {
        return Err(ValidationError::ZeroTimestamp);
    }

    require_non_blank(&message.text, MessageField::Text)?;
    require_non_empty(&message.chat_id, MessageField::ChatId)?;
    check_content_type(message.content_type)?;
    check_message_type(message.message_type)?;

    if message.content_type == ContentType::Sticker {
        check_sticker(message)?;
    }

    Ok(())
}

/// Validates a relayed membership update against the local current time.
///
/// Only events claiming to be from the future are bounded; see
/// [`clock::validate_relayed_clocks`].
///
/// # Errors
///
/// Returns `ExcessiveDrift` for the first event too far ahead of `now`.
pub fn validate_membership_update(
    message: &MembershipUpdateMessage,
    now: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    clock::validate_relayed_clocks(&message.events, now, config.drift_window_ms())?;
    Ok(())
}

fn check_clock(
    value: LogicalClock,
    reference: ReferenceTimestamp,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    clock::validate_clock_within(value, reference, config.drift_window_ms())?;
    Ok(())
}

fn require_non_blank(value: &str, field: MessageField) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

// Identifiers are compared byte-for-byte downstream, so no trimming here.
const fn require_non_empty(value: &str, field: MessageField) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

// Magnitudes past `f64::MAX` parse to infinity; only spelled-out
// infinities may do so.
fn require_decimal(value: &str, field: MessageField) -> ValidationResult<()> {
    let parsed = value
        .parse::<f64>()
        .map_err(|source| ValidationError::parse(field, source.into()))?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(ValidationError::parse(field, DecimalError::OutOfRange));
    }
    Ok(())
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

const fn check_content_type(content_type: ContentType) -> ValidationResult<()> {
    match content_type {
        ContentType::UnknownContentType => Err(ValidationError::InvalidEnum(
            EnumViolation::UnknownContentType(content_type),
        )),
        ContentType::TransactionCommand => Err(ValidationError::InvalidEnum(
            EnumViolation::TransactionCommandFromPeer,
        )),
        _ => Ok(()),
    }
}

const fn check_message_type(message_type: MessageType) -> ValidationResult<()> {
    match message_type {
        MessageType::UnknownMessageType => Err(ValidationError::InvalidEnum(
            EnumViolation::UnknownMessageType(message_type),
        )),
        MessageType::SystemMessagePrivateGroup => Err(ValidationError::InvalidEnum(
            EnumViolation::PrivateGroupSystemMessage,
        )),
        _ => Ok(()),
    }
}

fn check_sticker(message: &ChatMessage) -> ValidationResult<()> {
    if message.payload.is_none() {
        return Err(MissingPayload::StickerContent.into());
    }
    let sticker = message.sticker().ok_or(MissingPayload::StickerContent)?;
    if sticker.hash.is_empty() {
        return Err(MissingPayload::StickerHash.into());
    }
    Ok(())
}
