//! Entities.

use super::value_object::{ConnectionId, DisplayName, Timestamp};

/// A connection that has chosen a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub connection_id: ConnectionId,
    pub display_name: DisplayName,
    pub joined_at: Timestamp,
}

impl Participant {
    pub fn new(connection_id: ConnectionId, display_name: DisplayName, joined_at: Timestamp) -> Self {
        Self {
            connection_id,
            display_name,
            joined_at,
        }
    }

    pub fn name(&self) -> &str {
        self.display_name.as_str()
    }
}

/// One line of the round's history.
///
/// `display_name` is whatever the sender claimed in the payload, not
/// necessarily a registered participant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub display_name: String,
    pub text: String,
}

impl ChatMessage {
    pub fn new(display_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            text: text.into(),
        }
    }
}
