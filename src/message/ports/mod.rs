//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the admission service depends on.

pub mod validator;

pub use validator::{MAX_CLOCK_DRIFT_MS, MessageValidator, ValidationConfig, ValidationResult};
