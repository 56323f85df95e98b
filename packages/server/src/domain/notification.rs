//! Outbound notifications produced by the session.
//!
//! Transport-independent; the infrastructure layer maps each variant onto a
//! wire event.

use super::entity::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Message(ChatMessage),
    /// Full history, sent to a participant right after joining.
    UpdateMessages(Vec<ChatMessage>),
    ResetGame,
    GameOver,
    /// The word the submitter just repeated.
    Warning(String),
    Error(String),
    UpdateConnections(usize),
    UpdateUsers(Vec<String>),
    UserJoined(String),
    GameStarted(String),
    NextPlayer(String),
    GameAlreadyStarted,
    BannedWordAdded(String),
}

impl Notification {
    /// Wire event name, used in logs.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::UpdateMessages(_) => "updateMessages",
            Self::ResetGame => "resetGame",
            Self::GameOver => "gameOver",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::UpdateConnections(_) => "updateConnections",
            Self::UpdateUsers(_) => "updateUsers",
            Self::UserJoined(_) => "userJoined",
            Self::GameStarted(_) => "gameStarted",
            Self::NextPlayer(_) => "nextPlayer",
            Self::GameAlreadyStarted => "gameAlreadyStarted",
            Self::BannedWordAdded(_) => "bannedWordAdded",
        }
    }
}
