//! Unit tests for validation service.

use super::fixtures::{
    NOW_MS, accept_request_address, clock_at_now, decline_request_address,
    decline_request_transaction, default_validator, now, request_address, request_transaction,
    send_transaction, sticker, sticker_message, text_message,
};
use crate::message::{
    domain::{
        ChatPayload, ContentType, ImageMessage, InboundMessage, LogicalClock, MembershipEventType,
        MembershipUpdateEvent, MembershipUpdateMessage, MessageType, PairInstallation,
        ReferenceTimestamp,
    },
    error::{
        ClockError, EnumViolation, MessageField, MissingPayload, ValidationError,
        ValidationErrorKind,
    },
    ports::validator::{MAX_CLOCK_DRIFT_MS, MessageValidator, ValidationConfig},
    validation::service::DefaultMessageValidator,
};
use rstest::rstest;

// ============================================================================
// Helpers
// ============================================================================

fn pair_installation(name: &str, device_type: &str, installation_id: &str) -> PairInstallation {
    PairInstallation::new(clock_at_now(), installation_id, device_type, name)
}

fn membership(clocks: &[u64]) -> MembershipUpdateMessage {
    let events = clocks
        .iter()
        .map(|clock| {
            MembershipUpdateEvent::new(LogicalClock::new(*clock), MembershipEventType::MembersAdded)
                .with_members(["0x04aa"])
        })
        .collect();
    MembershipUpdateMessage::new("group-1", events)
}

/// One valid message of every clock-checked kind.
fn valid_clocked_messages() -> Vec<InboundMessage> {
    vec![
        pair_installation("dev", "mobile", "abc").into(),
        send_transaction("0xdeadbeef", Some(vec![1, 2, 3])).into(),
        request_address("1.5").into(),
        request_transaction("1.5", "0xabc").into(),
        accept_request_address("req-1", "0xabc").into(),
        decline_request_address("req-1").into(),
        decline_request_transaction("req-1").into(),
        text_message("hello").into(),
    ]
}

fn with_clock(message: InboundMessage, value: u64) -> InboundMessage {
    let clock = LogicalClock::new(value);
    match message {
        InboundMessage::PairInstallation(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::SendTransaction(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::RequestAddressForTransaction(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::RequestTransaction(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::AcceptRequestAddressForTransaction(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::DeclineRequestAddressForTransaction(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::DeclineRequestTransaction(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::ChatMessage(mut inner) => {
            inner.clock = clock;
            inner.into()
        }
        InboundMessage::MembershipUpdate(mut inner) => {
            for event in &mut inner.events {
                event.clock = clock;
            }
            inner.into()
        }
    }
}

fn validate(
    validator: &DefaultMessageValidator,
    message: impl Into<InboundMessage>,
) -> Result<(), ValidationError> {
    validator.validate(&message.into(), ReferenceTimestamp::from_millis(NOW_MS))
}

// ============================================================================
// Clock checks shared by every clocked kind
// ============================================================================

#[rstest]
fn valid_messages_of_every_kind_pass(
    default_validator: DefaultMessageValidator,
    now: ReferenceTimestamp,
) {
    for message in valid_clocked_messages() {
        let result = default_validator.validate(&message, now);
        assert!(result.is_ok(), "{} should pass: {result:?}", message.kind());
    }
}

#[rstest]
fn zero_clock_is_rejected_for_every_kind(
    default_validator: DefaultMessageValidator,
    now: ReferenceTimestamp,
) {
    for message in valid_clocked_messages() {
        let zeroed = with_clock(message, 0);
        assert_eq!(
            default_validator.validate(&zeroed, now),
            Err(ValidationError::Clock(ClockError::ZeroClock)),
            "{} should reject a zero clock",
            zeroed.kind()
        );
    }
}

#[rstest]
#[case(NOW_MS + MAX_CLOCK_DRIFT_MS, true)]
#[case(NOW_MS - MAX_CLOCK_DRIFT_MS, true)]
#[case(NOW_MS + MAX_CLOCK_DRIFT_MS + 1, false)]
#[case(NOW_MS - MAX_CLOCK_DRIFT_MS - 1, false)]
#[case(1_000, false)]
fn drift_window_is_symmetric_for_every_kind(
    default_validator: DefaultMessageValidator,
    now: ReferenceTimestamp,
    #[case] clock: u64,
    #[case] accepted: bool,
) {
    for message in valid_clocked_messages() {
        let shifted = with_clock(message, clock);
        let result = default_validator.validate(&shifted, now);
        if accepted {
            assert!(result.is_ok(), "{} should pass: {result:?}", shifted.kind());
        } else {
            let kind = result.map_err(|error| error.kind());
            assert_eq!(kind, Err(ValidationErrorKind::ExcessiveDrift));
        }
    }
}

#[rstest]
fn clock_check_precedes_field_checks(default_validator: DefaultMessageValidator) {
    let mut message = text_message("");
    message.clock = LogicalClock::new(0);

    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::Clock(ClockError::ZeroClock))
    );
}

#[rstest]
fn validation_is_idempotent(default_validator: DefaultMessageValidator, now: ReferenceTimestamp) {
    let messages = [
        InboundMessage::from(request_address("abc")),
        InboundMessage::from(text_message("hello")),
        InboundMessage::from(membership(&[NOW_MS + 200_000])),
    ];
    for message in messages {
        assert_eq!(
            default_validator.validate(&message, now),
            default_validator.validate(&message, now)
        );
    }
}

#[rstest]
fn custom_drift_window_is_applied(now: ReferenceTimestamp) {
    let validator = DefaultMessageValidator::with_config(ValidationConfig::with_max_clock_drift(10));
    let message = with_clock(text_message("hello").into(), NOW_MS + 11);

    let result = validator.validate(&message, now);
    assert!(matches!(
        result,
        Err(ValidationError::Clock(ClockError::ExcessiveDrift {
            drift_ms: 11,
            max_drift_ms: 10,
            ..
        }))
    ));
}

#[rstest]
#[case(NOW_MS + MAX_CLOCK_DRIFT_MS + 1)]
#[case(NOW_MS - 10 * MAX_CLOCK_DRIFT_MS)]
fn widened_drift_window_is_capped(now: ReferenceTimestamp, #[case] clock: u64) {
    let validator =
        DefaultMessageValidator::with_config(ValidationConfig::with_max_clock_drift(u64::MAX));
    let message = with_clock(text_message("hello").into(), clock);

    let result = validator.validate(&message, now);
    assert!(matches!(
        result,
        Err(ValidationError::Clock(ClockError::ExcessiveDrift {
            max_drift_ms: MAX_CLOCK_DRIFT_MS,
            ..
        }))
    ));
}

#[rstest]
fn widened_drift_window_is_capped_for_membership(now: ReferenceTimestamp) {
    let validator =
        DefaultMessageValidator::with_config(ValidationConfig::with_max_clock_drift(u64::MAX));
    let result = validator.validate(&membership(&[NOW_MS + 200_000]).into(), now);

    assert_eq!(
        result.map_err(|error| error.kind()),
        Err(ValidationErrorKind::ExcessiveDrift)
    );
}

// ============================================================================
// PairInstallation
// ============================================================================

#[rstest]
#[case(" ", "mobile", "abc", MessageField::Name)]
#[case("dev", "", "abc", MessageField::DeviceType)]
#[case("dev", "mobile", "\t", MessageField::InstallationId)]
#[case("", "", "", MessageField::Name)]
fn pair_installation_requires_fields_in_order(
    default_validator: DefaultMessageValidator,
    #[case] name: &str,
    #[case] device_type: &str,
    #[case] installation_id: &str,
    #[case] field: MessageField,
) {
    let message = pair_installation(name, device_type, installation_id);
    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::EmptyField(field))
    );
}

// ============================================================================
// Transaction commands
// ============================================================================

#[rstest]
fn send_transaction_requires_hash(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, send_transaction("  ", Some(vec![1]))),
        Err(ValidationError::EmptyField(MessageField::TransactionHash))
    );
}

#[rstest]
fn send_transaction_requires_signature(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, send_transaction("0xdeadbeef", None)),
        Err(ValidationError::MissingPayload(MissingPayload::Signature))
    );
}

#[rstest]
fn send_transaction_accepts_present_but_empty_signature(
    default_validator: DefaultMessageValidator,
) {
    assert!(validate(&default_validator, send_transaction("0xdeadbeef", Some(Vec::new()))).is_ok());
}

#[rstest]
fn request_address_rejects_non_numeric_value(default_validator: DefaultMessageValidator) {
    let error = validate(&default_validator, request_address("abc")).expect_err("abc is not a number");

    assert_eq!(error.kind(), ValidationErrorKind::ParseError);
    assert!(matches!(
        error,
        ValidationError::Parse {
            field: MessageField::Value,
            ..
        }
    ));
    assert!(error.to_string().contains("invalid float literal"));
}

#[rstest]
#[case("1.5")]
#[case("100")]
#[case("0.000001")]
fn request_address_accepts_decimal_value(
    default_validator: DefaultMessageValidator,
    #[case] value: &str,
) {
    assert!(validate(&default_validator, request_address(value)).is_ok());
}

#[rstest]
fn request_address_rejects_blank_value(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, request_address("   ")),
        Err(ValidationError::EmptyField(MessageField::Value))
    );
}

#[rstest]
#[case("", "", ValidationErrorKind::EmptyField)]
#[case("abc", " ", ValidationErrorKind::EmptyField)]
#[case("abc", "0xabc", ValidationErrorKind::ParseError)]
fn request_transaction_checks_emptiness_before_parsing(
    default_validator: DefaultMessageValidator,
    #[case] value: &str,
    #[case] address: &str,
    #[case] expected: ValidationErrorKind,
) {
    let result = validate(&default_validator, request_transaction(value, address));
    assert_eq!(result.map_err(|error| error.kind()), Err(expected));
}

#[rstest]
fn request_transaction_reports_value_before_address(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, request_transaction(" ", " ")),
        Err(ValidationError::EmptyField(MessageField::Value))
    );
    assert_eq!(
        validate(&default_validator, request_transaction("abc", " ")),
        Err(ValidationError::EmptyField(MessageField::Address))
    );
}

#[rstest]
fn accept_request_address_requires_id(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, accept_request_address("", "0xabc")),
        Err(ValidationError::EmptyField(MessageField::MessageId))
    );
}

#[rstest]
fn accept_request_address_does_not_trim_id(default_validator: DefaultMessageValidator) {
    assert!(validate(&default_validator, accept_request_address(" ", "0xabc")).is_ok());
}

#[rstest]
fn accept_request_address_requires_address(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, accept_request_address("req-1", " \n")),
        Err(ValidationError::EmptyField(MessageField::Address))
    );
}

#[rstest]
fn decline_messages_require_id(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, decline_request_address("")),
        Err(ValidationError::EmptyField(MessageField::MessageId))
    );
    assert_eq!(
        validate(&default_validator, decline_request_transaction("")),
        Err(ValidationError::EmptyField(MessageField::MessageId))
    );
}

// ============================================================================
// ChatMessage
// ============================================================================

#[rstest]
fn chat_message_with_empty_text_is_rejected(default_validator: DefaultMessageValidator) {
    let mut message = text_message("");
    message.clock = LogicalClock::new(NOW_MS - 1_000);

    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::EmptyField(MessageField::Text))
    );
}

#[rstest]
fn chat_message_with_whitespace_text_is_rejected(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, text_message(" \t\n")),
        Err(ValidationError::EmptyField(MessageField::Text))
    );
}

#[rstest]
fn chat_message_requires_timestamp(default_validator: DefaultMessageValidator) {
    let mut message = text_message("");
    message.timestamp = 0;

    let error = validate(&default_validator, message).expect_err("timestamp is unset");
    assert_eq!(error, ValidationError::ZeroTimestamp);
    assert_eq!(error.kind(), ValidationErrorKind::EmptyField);
}

#[rstest]
fn chat_message_requires_chat_id(default_validator: DefaultMessageValidator) {
    let mut message = text_message("hello");
    message.chat_id = String::new();

    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::EmptyField(MessageField::ChatId))
    );
}

#[rstest]
#[case(
    ContentType::UnknownContentType,
    EnumViolation::UnknownContentType(ContentType::UnknownContentType)
)]
#[case(ContentType::TransactionCommand, EnumViolation::TransactionCommandFromPeer)]
fn chat_message_rejects_disallowed_content_types(
    default_validator: DefaultMessageValidator,
    #[case] content_type: ContentType,
    #[case] violation: EnumViolation,
) {
    let message = text_message("hello").with_content_type(content_type);
    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::InvalidEnum(violation))
    );
}

#[rstest]
#[case(
    MessageType::UnknownMessageType,
    EnumViolation::UnknownMessageType(MessageType::UnknownMessageType)
)]
#[case(MessageType::SystemMessagePrivateGroup, EnumViolation::PrivateGroupSystemMessage)]
fn chat_message_rejects_disallowed_message_types(
    default_validator: DefaultMessageValidator,
    #[case] message_type: MessageType,
    #[case] violation: EnumViolation,
) {
    let message = text_message("hello").with_message_type(message_type);
    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::InvalidEnum(violation))
    );
}

#[rstest]
fn chat_message_checks_content_type_before_message_type(
    default_validator: DefaultMessageValidator,
) {
    let message = text_message("hello")
        .with_content_type(ContentType::TransactionCommand)
        .with_message_type(MessageType::UnknownMessageType);

    assert_eq!(
        validate(&default_validator, message),
        Err(ValidationError::InvalidEnum(
            EnumViolation::TransactionCommandFromPeer
        ))
    );
}

#[rstest]
#[case(ContentType::TextPlain)]
#[case(ContentType::Emoji)]
#[case(ContentType::Status)]
#[case(ContentType::Image)]
#[case(ContentType::Audio)]
#[case(ContentType::SystemMessageContentPrivateGroup)]
fn chat_message_accepts_other_content_types_without_payload(
    default_validator: DefaultMessageValidator,
    #[case] content_type: ContentType,
) {
    let message = text_message("hello").with_content_type(content_type);
    assert!(validate(&default_validator, message).is_ok());
}

#[rstest]
#[case(MessageType::OneToOne)]
#[case(MessageType::PublicGroup)]
#[case(MessageType::PrivateGroup)]
fn chat_message_accepts_peer_message_types(
    default_validator: DefaultMessageValidator,
    #[case] message_type: MessageType,
) {
    let message = text_message("hello").with_message_type(message_type);
    assert!(validate(&default_validator, message).is_ok());
}

#[rstest]
fn sticker_without_payload_is_rejected(default_validator: DefaultMessageValidator) {
    assert_eq!(
        validate(&default_validator, sticker_message(None)),
        Err(ValidationError::MissingPayload(MissingPayload::StickerContent))
    );
}

#[rstest]
fn sticker_with_non_sticker_payload_is_rejected(default_validator: DefaultMessageValidator) {
    let payload = ChatPayload::Image(ImageMessage {
        payload: vec![0x89, 0x50],
        format: "png".to_owned(),
    });

    assert_eq!(
        validate(&default_validator, sticker_message(Some(payload))),
        Err(ValidationError::MissingPayload(MissingPayload::StickerContent))
    );
}

#[rstest]
fn sticker_without_hash_is_rejected(default_validator: DefaultMessageValidator) {
    let error = validate(&default_validator, sticker_message(Some(sticker(""))))
        .expect_err("sticker hash is empty");

    assert_eq!(
        error,
        ValidationError::MissingPayload(MissingPayload::StickerHash)
    );
    assert_eq!(error.to_string(), "sticker hash not set");
}

#[rstest]
fn sticker_with_hash_passes(default_validator: DefaultMessageValidator) {
    assert!(validate(&default_validator, sticker_message(Some(sticker("0xe301")))).is_ok());
}

// ============================================================================
// MembershipUpdateMessage
// ============================================================================

#[rstest]
fn membership_event_far_in_future_is_rejected(
    default_validator: DefaultMessageValidator,
    now: ReferenceTimestamp,
) {
    let message = membership(&[NOW_MS + 200_000]).into();
    let result = default_validator.validate(&message, now);

    assert_eq!(
        result.map_err(|error| error.kind()),
        Err(ValidationErrorKind::ExcessiveDrift)
    );
}

#[rstest]
#[case(&[NOW_MS - 10_000_000])]
#[case(&[NOW_MS + MAX_CLOCK_DRIFT_MS])]
#[case(&[0])]
#[case(&[1, NOW_MS, NOW_MS + 1])]
#[case(&[])]
fn membership_events_without_future_drift_pass(
    default_validator: DefaultMessageValidator,
    now: ReferenceTimestamp,
    #[case] clocks: &[u64],
) {
    let message = membership(clocks).into();
    assert!(default_validator.validate(&message, now).is_ok());
}

#[rstest]
fn any_future_event_rejects_the_whole_update(
    default_validator: DefaultMessageValidator,
    now: ReferenceTimestamp,
) {
    let message = membership(&[NOW_MS - 5, NOW_MS, NOW_MS + MAX_CLOCK_DRIFT_MS + 1]).into();

    assert!(matches!(
        default_validator.validate(&message, now),
        Err(ValidationError::Clock(ClockError::ExcessiveDrift { drift_ms, .. }))
            if drift_ms == MAX_CLOCK_DRIFT_MS + 1
    ));
}
