//! Cloneable front door to the session actor.

use tokio::sync::{mpsc, oneshot};

use crate::domain::{ConnectionId, PusherChannel};

use super::{
    error::SessionClosed,
    session::{SessionCommand, SessionSnapshot},
};

/// Sends commands to the session actor without waiting for them to be applied.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub fn new(commands: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { commands }
    }

    pub fn send(&self, command: SessionCommand) -> Result<(), SessionClosed> {
        self.commands.send(command).map_err(|_| SessionClosed)
    }

    pub fn connect(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Connect {
            connection_id,
            sender,
        })
    }

    pub fn disconnect(&self, connection_id: ConnectionId) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Disconnect { connection_id })
    }

    pub fn join(
        &self,
        connection_id: ConnectionId,
        display_name: String,
    ) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Join {
            connection_id,
            display_name,
        })
    }

    pub fn message(
        &self,
        connection_id: ConnectionId,
        display_name: String,
        text: String,
    ) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Message {
            connection_id,
            display_name,
            text,
        })
    }

    pub fn start_game(&self, connection_id: ConnectionId) -> Result<(), SessionClosed> {
        self.send(SessionCommand::StartGame { connection_id })
    }

    pub fn add_banned_word(
        &self,
        connection_id: ConnectionId,
        word: String,
    ) -> Result<(), SessionClosed> {
        self.send(SessionCommand::AddBannedWord {
            connection_id,
            word,
        })
    }

    /// Consistent view of the state, taken between two commands.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionClosed> {
        let (reply, receiver) = oneshot::channel();
        self.send(SessionCommand::Snapshot { reply })?;
        receiver.await.map_err(|_| SessionClosed)
    }
}
