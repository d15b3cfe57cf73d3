//! Group membership updates.
//!
//! Membership events are signed by their author and relayed by other group
//! members, so the transport timestamp of the relaying hop says nothing
//! about when the event was created.

use super::LogicalClock;
use serde::{Deserialize, Serialize};

/// Kind of change a membership event applies to the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipEventType {
    /// The group was created.
    ChatCreated,
    /// The group was renamed.
    NameChanged,
    /// Members were added.
    MembersAdded,
    /// A member joined after being added.
    MemberJoined,
    /// A member was removed.
    MemberRemoved,
    /// Admin rights were granted.
    AdminsAdded,
    /// Admin rights were revoked.
    AdminRemoved,
}

/// One signed change to a group's membership.
///
/// # Examples
///
/// ```
/// use chatgate::message::domain::{LogicalClock, MembershipEventType, MembershipUpdateEvent};
///
/// let event = MembershipUpdateEvent::new(LogicalClock::new(42), MembershipEventType::ChatCreated)
///     .with_name("friends");
/// assert_eq!(event.name, "friends");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipUpdateEvent {
    /// Author's logical clock for this event.
    pub clock: LogicalClock,
    /// What the event changes.
    #[serde(rename = "type")]
    pub event_type: MembershipEventType,
    /// Members affected by the event.
    #[serde(default)]
    pub members: Vec<String>,
    /// New group name, for creation and rename events.
    #[serde(default)]
    pub name: String,
}

impl MembershipUpdateEvent {
    /// Creates an event with no members and no name.
    #[must_use]
    pub const fn new(clock: LogicalClock, event_type: MembershipEventType) -> Self {
        Self {
            clock,
            event_type,
            members: Vec::new(),
            name: String::new(),
        }
    }

    /// Sets the affected members.
    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the group name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// An ordered batch of membership events for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipUpdateMessage {
    /// Group the events apply to.
    pub chat_id: String,
    /// Events in application order.
    #[serde(default)]
    pub events: Vec<MembershipUpdateEvent>,
}

impl MembershipUpdateMessage {
    /// Creates an update carrying `events`.
    #[must_use]
    pub fn new(chat_id: impl Into<String>, events: Vec<MembershipUpdateEvent>) -> Self {
        Self {
            chat_id: chat_id.into(),
            events,
        }
    }
}
