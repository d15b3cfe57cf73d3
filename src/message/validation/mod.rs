//! Inbound message validation.
//!
//! This module provides the logical clock checks, one rule per message kind,
//! and the validator service that routes a message to its rule.

pub mod clock;
pub mod rules;
pub mod service;

pub use clock::{validate_clock, validate_clock_within, validate_relayed_clocks};
pub use rules::{
    validate_accept_request_address_for_transaction, validate_chat_message,
    validate_decline_request_address_for_transaction, validate_decline_request_transaction,
    validate_membership_update, validate_pair_installation,
    validate_request_address_for_transaction, validate_request_transaction,
    validate_send_transaction,
};
pub use service::DefaultMessageValidator;
