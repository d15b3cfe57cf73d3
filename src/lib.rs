//! Chatgate: admission gate for inbound peer-to-peer chat messages.
//!
//! Before a decoded protocol message enters local chat state or is relayed
//! further, it passes through this crate. The gate bounds the sender's
//! logical clock against a locally observed timestamp and enforces the
//! structural invariants of each message kind.
//!
//! # Architecture
//!
//! Chatgate follows hexagonal architecture principles:
//!
//! - **Domain**: Decoded message kinds with no infrastructure dependencies
//! - **Ports**: The abstract validator interface and its configuration
//! - **Validation**: Pure clock and field rules, one per message kind
//! - **Services**: The admission gate that selects reference timestamps
//!
//! # Modules
//!
//! - [`message`]: Inbound message types, validation, and admission

pub mod message;
