//! Inbound message types, validation, and admission.
//!
//! # Architecture
//!
//! - **Domain**: Decoded kinds ([`domain::ChatMessage`], [`domain::PairInstallation`],
//!   [`domain::MembershipUpdateMessage`], ...) wrapped in [`domain::InboundMessage`]
//! - **Ports**: [`ports::validator::MessageValidator`] and [`ports::validator::ValidationConfig`]
//! - **Validation**: Clock drift checks and per-kind field rules
//! - **Services**: [`services::AdmissionService`], the gate in front of chat state
//!
//! Validation is pure and synchronous: no I/O, no shared state, and the
//! first failing check decides the verdict.
//!
//! # Example
//!
//! ```
//! use chatgate::message::domain::{
//!     ChatMessage, InboundMessage, LogicalClock, ReferenceTimestamp,
//! };
//! use chatgate::message::error::ValidationErrorKind;
//! use chatgate::message::ports::validator::MessageValidator;
//! use chatgate::message::validation::service::DefaultMessageValidator;
//!
//! let now = 1_700_000_000_000;
//! let message = InboundMessage::from(ChatMessage::new(LogicalClock::new(1_000), now, "c1", "hi"));
//!
//! let validator = DefaultMessageValidator::new();
//! let error = validator
//!     .validate(&message, ReferenceTimestamp::from_millis(now))
//!     .expect_err("clock is far behind the transport timestamp");
//! assert_eq!(error.kind(), ValidationErrorKind::ExcessiveDrift);
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
