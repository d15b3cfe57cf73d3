//! Validator port for inbound message admission.
//!
//! Defines the abstract interface the admission service checks messages
//! through, along with its configuration.

use crate::message::{
    domain::{InboundMessage, ReferenceTimestamp},
    error::ValidationError,
};
use serde::Deserialize;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest allowed distance, in milliseconds, between a message's logical
/// clock and the reference timestamp.
pub const MAX_CLOCK_DRIFT_MS: u64 = 120_000;

/// Port for inbound message validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Run the clock check before any field check
/// - Stop at the first failing check (fail-fast, no error accumulation)
/// - Be stateless and thread-safe
pub trait MessageValidator: Send + Sync {
    /// Validates `message` against `reference`.
    ///
    /// For relayed kinds (membership updates) `reference` is the local
    /// current time; for every other kind it is the transport timestamp.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(
        &self,
        message: &InboundMessage,
        reference: ReferenceTimestamp,
    ) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// The default reproduces the protocol's fixed two-minute drift window.
/// Hosts may narrow the window but never widen it: values above
/// [`MAX_CLOCK_DRIFT_MS`] are capped by [`ValidationConfig::drift_window_ms`].
///
/// # Examples
///
/// ```
/// use chatgate::message::ports::validator::{MAX_CLOCK_DRIFT_MS, ValidationConfig};
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_clock_drift_ms, MAX_CLOCK_DRIFT_MS);
///
/// let loaded = ValidationConfig::from_json(r#"{"max_clock_drift_ms": 5000}"#)
///     .expect("valid config");
/// assert_eq!(loaded.max_clock_drift_ms, 5_000);
///
/// let wide = ValidationConfig::with_max_clock_drift(u64::MAX);
/// assert_eq!(wide.drift_window_ms(), MAX_CLOCK_DRIFT_MS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Maximum clock drift in milliseconds, capped at [`MAX_CLOCK_DRIFT_MS`].
    pub max_clock_drift_ms: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_clock_drift_ms: MAX_CLOCK_DRIFT_MS,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with a custom drift window.
    #[must_use]
    pub const fn with_max_clock_drift(max_clock_drift_ms: u64) -> Self {
        Self { max_clock_drift_ms }
    }

    /// Returns the drift window the validators apply.
    #[must_use]
    pub const fn drift_window_ms(&self) -> u64 {
        if self.max_clock_drift_ms < MAX_CLOCK_DRIFT_MS {
            self.max_clock_drift_ms
        } else {
            MAX_CLOCK_DRIFT_MS
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the document is malformed or names
    /// an unknown field.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
