//! Device pairing messages exchanged between a user's own installations.

use super::LogicalClock;
use serde::{Deserialize, Serialize};

/// Announces an installation to the sender's other devices.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{LogicalClock, PairInstallation};
///
/// let pairing = PairInstallation::new(LogicalClock::new(10), "abc", "mobile", "dev");
/// assert_eq!(pairing.device_type, "mobile");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInstallation {
    /// Sender's logical clock.
    pub clock: LogicalClock,
    /// Identifier of the announced installation.
    pub installation_id: String,
    /// Free-form device class such as `mobile` or `desktop`.
    pub device_type: String,
    /// Human-readable device name.
    pub name: String,
}

impl PairInstallation {
    /// Creates a pairing announcement.
    #[must_use]
    pub fn new(
        clock: LogicalClock,
        installation_id: impl Into<String>,
        device_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            clock,
            installation_id: installation_id.into(),
            device_type: device_type.into(),
            name: name.into(),
        }
    }
}
