//! Admission gate for decoded inbound messages.
//!
//! The `AdmissionService` picks the reference timestamp each message kind is
//! checked against, runs the validator, and records the verdict. A rejected
//! message is never retried or repaired; the caller decides what to do with
//! it.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, trace};

use crate::message::{
    domain::{InboundMessage, MessageKind, ReferenceTimestamp},
    error::ValidationError,
    ports::validator::MessageValidator,
};

/// Result type for admission decisions.
pub type AdmissionResult = Result<(), ValidationError>;

/// Service deciding whether inbound messages may enter local chat state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use chatgate::message::domain::{
///     InboundMessage, LogicalClock, PairInstallation, ReferenceTimestamp,
/// };
/// use chatgate::message::services::AdmissionService;
/// use chatgate::message::validation::DefaultMessageValidator;
/// use mockable::DefaultClock;
///
/// let service = AdmissionService::new(
///     Arc::new(DefaultMessageValidator::new()),
///     Arc::new(DefaultClock),
/// );
///
/// let received_at = 1_700_000_000_000;
/// let message = InboundMessage::from(PairInstallation::new(
///     LogicalClock::new(received_at),
///     "abc",
///     "mobile",
///     "dev",
/// ));
/// assert!(service
///     .admit(&message, ReferenceTimestamp::from_millis(received_at))
///     .is_ok());
/// ```
#[derive(Clone)]
pub struct AdmissionService<V, C>
where
    V: MessageValidator,
    C: Clock + Send + Sync,
{
    validator: Arc<V>,
    clock: Arc<C>,
}

impl<V, C> AdmissionService<V, C>
where
    V: MessageValidator,
    C: Clock + Send + Sync,
{
    /// Creates a new admission service.
    #[must_use]
    pub const fn new(validator: Arc<V>, clock: Arc<C>) -> Self {
        Self { validator, clock }
    }

    /// Admits or rejects one message.
    ///
    /// `transport_timestamp` is the epoch-millisecond time at which the
    /// transport delivered the message. Relayed kinds are compared against
    /// the clock's current time instead.
    ///
    /// # Errors
    ///
    /// Returns the validator's [`ValidationError`] when the message is
    /// rejected.
    pub fn admit(
        &self,
        message: &InboundMessage,
        transport_timestamp: ReferenceTimestamp,
    ) -> AdmissionResult {
        let kind = message.kind();
        let reference = self.reference_for(kind, transport_timestamp);

        match self.validator.validate(message, reference) {
            Ok(()) => {
                trace!(%kind, %reference, "admitted inbound message");
                Ok(())
            }
            Err(error) => {
                debug!(
                    %kind,
                    %reference,
                    error_kind = %error.kind(),
                    %error,
                    "rejected inbound message"
                );
                Err(error)
            }
        }
    }

    /// Returns the timestamp `kind` is checked against.
    #[must_use]
    pub fn reference_for(
        &self,
        kind: MessageKind,
        transport_timestamp: ReferenceTimestamp,
    ) -> ReferenceTimestamp {
        if kind.is_relayed() {
            ReferenceTimestamp::from_datetime(self.clock.utc())
        } else {
            transport_timestamp
        }
    }
}
