//! Clock newtypes used by the drift checks.
//!
//! Both values are millisecond counts. A [`LogicalClock`] travels inside the
//! message and is controlled by the sender; a [`ReferenceTimestamp`] is
//! supplied locally by the transport layer or the host's time source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sender-assigned ordering value carried on every message.
///
/// The value is expected to be non-decreasing per sender but nothing
/// guarantees it; zero is never a valid clock.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::LogicalClock;
///
/// let clock = LogicalClock::new(1_700_000_000_000);
/// assert_eq!(clock.value(), 1_700_000_000_000);
/// assert!(!clock.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LogicalClock(u64);

impl LogicalClock {
    /// Creates a logical clock from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw clock value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the clock was never set.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for LogicalClock {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LogicalClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Epoch milliseconds used as the trust anchor for drift comparison.
///
/// For most kinds this is the transport's receipt time; relayed membership
/// events are compared against the local current time instead.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::ReferenceTimestamp;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.timestamp_millis_opt(1_500).single().expect("valid instant");
/// assert_eq!(ReferenceTimestamp::from_datetime(at).as_millis(), 1_500);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReferenceTimestamp(u64);

impl ReferenceTimestamp {
    /// Creates a reference timestamp from epoch milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Converts a UTC instant into epoch milliseconds.
    ///
    /// Instants before the Unix epoch clamp to zero.
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(u64::try_from(at.timestamp_millis()).unwrap_or(0))
    }

    /// Returns the timestamp in epoch milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ReferenceTimestamp {
    fn from(millis: u64) -> Self {
        Self(millis)
    }
}

impl fmt::Display for ReferenceTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
