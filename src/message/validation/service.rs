//! Validation service implementation.
//!
//! Provides the default implementation of the `MessageValidator` port,
//! routing each message kind to its rule.

use crate::message::{
    domain::{InboundMessage, ReferenceTimestamp},
    ports::validator::{MessageValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the message validator.
///
/// Fails fast: the first failing check of the matching rule is returned.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{
///     InboundMessage, LogicalClock, ReferenceTimestamp, RequestAddressForTransaction,
/// };
/// use chatgate::message::ports::validator::MessageValidator;
/// use chatgate::message::validation::service::DefaultMessageValidator;
///
/// let now = 1_700_000_000_000;
/// let message = InboundMessage::from(RequestAddressForTransaction::new(
///     LogicalClock::new(now),
///     "1.5",
/// ));
///
/// let validator = DefaultMessageValidator::new();
/// assert!(validator.validate(&message, ReferenceTimestamp::from_millis(now)).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultMessageValidator {
    config: ValidationConfig,
}

impl DefaultMessageValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl MessageValidator for DefaultMessageValidator {
    fn validate(
        &self,
        message: &InboundMessage,
        reference: ReferenceTimestamp,
    ) -> ValidationResult<()> {
        let config = &self.config;
        match message {
            InboundMessage::PairInstallation(inner) => {
                rules::validate_pair_installation(inner, reference, config)
            }
            InboundMessage::SendTransaction(inner) => {
                rules::validate_send_transaction(inner, reference, config)
            }
            InboundMessage::RequestAddressForTransaction(inner) => {
                rules::validate_request_address_for_transaction(inner, reference, config)
            }
            InboundMessage::RequestTransaction(inner) => {
                rules::validate_request_transaction(inner, reference, config)
            }
            InboundMessage::AcceptRequestAddressForTransaction(inner) => {
                rules::validate_accept_request_address_for_transaction(inner, reference, config)
            }
            InboundMessage::DeclineRequestAddressForTransaction(inner) => {
                rules::validate_decline_request_address_for_transaction(inner, reference, config)
            }
            InboundMessage::DeclineRequestTransaction(inner) => {
                rules::validate_decline_request_transaction(inner, reference, config)
            }
            InboundMessage::ChatMessage(inner) => {
                rules::validate_chat_message(inner, reference, config)
            }
            InboundMessage::MembershipUpdate(inner) => {
                rules::validate_membership_update(inner, reference, config)
            }
        }
    }
}

// Note: Unit tests for DefaultMessageValidator are located in
// src/message/tests/validation_tests.rs.
