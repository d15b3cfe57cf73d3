//! Logical clock drift checks.
//!
//! The logical clock rides in the plaintext envelope and is chosen by the
//! sender. Bounding its distance from a locally observed timestamp limits how
//! far a peer can reorder or backdate messages.

use crate::message::{
    domain::{LogicalClock, MembershipUpdateEvent, ReferenceTimestamp},
    error::ClockError,
    ports::validator::MAX_CLOCK_DRIFT_MS,
};

/// Checks `clock` against `reference` using the protocol's fixed window.
///
/// # Errors
///
/// Returns [`ClockError::ZeroClock`] if the clock is 0, or
/// [`ClockError::ExcessiveDrift`] if it is more than
/// [`MAX_CLOCK_DRIFT_MS`] away from `reference` in either direction.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{LogicalClock, ReferenceTimestamp};
/// use chatgate::message::error::ClockError;
/// use chatgate::message::validation::clock::validate_clock;
///
/// let now = ReferenceTimestamp::from_millis(1_000_000);
/// assert!(validate_clock(LogicalClock::new(1_120_000), now).is_ok());
/// assert!(matches!(
///     validate_clock(LogicalClock::new(1_120_001), now),
///     Err(ClockError::ExcessiveDrift { .. })
/// ));
/// ```
pub const fn validate_clock(
    clock: LogicalClock,
    reference: ReferenceTimestamp,
) -> Result<(), ClockError> {
    validate_clock_within(clock, reference, MAX_CLOCK_DRIFT_MS)
}

/// Checks `clock` against `reference` with a caller-chosen window.
///
/// `abs_diff` is exact over the whole `u64` range, so neither operand order
/// nor values near the type's bounds can wrap.
///
/// # Errors
///
/// Returns [`ClockError::ZeroClock`] if the clock is 0, or
/// [`ClockError::ExcessiveDrift`] if `|clock - reference|` exceeds
/// `max_drift_ms`.
pub const fn validate_clock_within(
    clock: LogicalClock,
    reference: ReferenceTimestamp,
    max_drift_ms: u64,
) -> Result<(), ClockError> {
    if clock.is_zero() {
        return Err(ClockError::ZeroClock);
    }

    let drift_ms = clock.value().abs_diff(reference.as_millis());
    if drift_ms > max_drift_ms {
        return Err(ClockError::ExcessiveDrift {
            clock,
            reference,
            drift_ms,
            max_drift_ms,
        });
    }

    Ok(())
}

/// One-sided check for relayed membership events.
///
/// Relayed events lose their original transport timestamp, so only clocks
/// running ahead of `now` are bounded. Old events and zero clocks pass.
///
/// # Errors
///
/// Returns [`ClockError::ExcessiveDrift`] for the first event whose clock is
/// more than `max_drift_ms` ahead of `now`.
pub fn validate_relayed_clocks(
    events: &[MembershipUpdateEvent],
    now: ReferenceTimestamp,
    max_drift_ms: u64,
) -> Result<(), ClockError> {
    for event in events {
        let Some(ahead_ms) = event.clock.value().checked_sub(now.as_millis()) else {
            continue;
        };
        if ahead_ms > max_drift_ms {
            return Err(ClockError::ExcessiveDrift {
                clock: event.clock,
                reference: now,
                drift_ms: ahead_ms,
                max_drift_ms,
            });
        }
    }
    Ok(())
}
