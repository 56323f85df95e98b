//! Live connections and the participants who have joined through them.
//!
//! Independent of game state: the game freezes its own copy of the roster.

use super::{entity::Participant, value_object::ConnectionId};

/// Outcome of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// First join on this connection.
    Joined,
    /// The connection had already joined; its display name was replaced.
    Renamed { previous: String },
}

#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    /// Insertion order.
    connections: Vec<ConnectionId>,
    /// Insertion order; at most one per connection.
    participants: Vec<Participant>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transport. Returns `false` if it was already registered.
    pub fn connect(&mut self, connection_id: ConnectionId) -> bool {
        if self.is_connected(&connection_id) {
            return false;
        }
        self.connections.push(connection_id);
        true
    }

    /// Attach a participant to its connection.
    ///
    /// Returns `None` when the connection is not registered.
    pub fn join(&mut self, participant: Participant) -> Option<JoinOutcome> {
        if !self.is_connected(&participant.connection_id) {
            return None;
        }
        match self
            .participants
            .iter_mut()
            .find(|p| p.connection_id == participant.connection_id)
        {
            Some(existing) => {
                let previous = existing.name().to_string();
                existing.display_name = participant.display_name;
                Some(JoinOutcome::Renamed { previous })
            }
            None => {
                self.participants.push(participant);
                Some(JoinOutcome::Joined)
            }
        }
    }

    /// Drop the connection and its participant, if any.
    ///
    /// Returns `false` when the connection was unknown.
    pub fn leave(&mut self, connection_id: &ConnectionId) -> bool {
        let before = self.connections.len();
        self.connections.retain(|id| id != connection_id);
        self.participants
            .retain(|p| &p.connection_id != connection_id);
        self.connections.len() != before
    }

    pub fn is_connected(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains(connection_id)
    }

    pub fn participant(&self, connection_id: &ConnectionId) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| &p.connection_id == connection_id)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Display names in join order.
    pub fn list(&self) -> Vec<String> {
        self.participants
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Number of live connections, joined or not.
    pub fn count(&self) -> usize {
        self.connections.len()
    }

    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connections.clone()
    }
}
