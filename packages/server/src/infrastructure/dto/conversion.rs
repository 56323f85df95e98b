//! Conversion logic between DTOs and domain / usecase types.

use shiritori_shared::time::millis_to_jst_rfc3339;

use crate::{
    domain::{ChatMessage, ConnectionId, GameStatus, Notification, Participant},
    infrastructure::dto::{
        http::{ParticipantDetailDto, SessionSnapshotDto},
        websocket::{ChatMessageDto, ClientEvent, ServerEvent},
    },
    usecase::{SessionCommand, SessionSnapshot},
};

// ========================================
// DTO → Domain
// ========================================

impl From<ChatMessageDto> for ChatMessage {
    fn from(dto: ChatMessageDto) -> Self {
        ChatMessage::new(dto.display_name, dto.text)
    }
}

impl ClientEvent {
    /// 受信したイベントを、送信元の接続を添えたセッションコマンドにする
    pub fn into_command(self, connection_id: ConnectionId) -> SessionCommand {
        match self {
            ClientEvent::Join(display_name) => SessionCommand::Join {
                connection_id,
                display_name,
            },
            ClientEvent::Message(dto) => SessionCommand::Message {
                connection_id,
                display_name: dto.display_name,
                text: dto.text,
            },
            ClientEvent::StartGame => SessionCommand::StartGame { connection_id },
            ClientEvent::AddBannedWord(word) => SessionCommand::AddBannedWord {
                connection_id,
                word,
            },
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<ChatMessage> for ChatMessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            display_name: model.display_name,
            text: model.text,
        }
    }
}

impl From<Notification> for ServerEvent {
    fn from(notification: Notification) -> Self {
        match notification {
            Notification::Message(message) => ServerEvent::Message(message.into()),
            Notification::UpdateMessages(messages) => {
                ServerEvent::UpdateMessages(messages.into_iter().map(Into::into).collect())
            }
            Notification::ResetGame => ServerEvent::ResetGame,
            Notification::GameOver => ServerEvent::GameOver,
            Notification::Warning(word) => ServerEvent::Warning(word),
            Notification::Error(text) => ServerEvent::Error(text),
            Notification::UpdateConnections(count) => ServerEvent::UpdateConnections(count),
            Notification::UpdateUsers(names) => ServerEvent::UpdateUsers(names),
            Notification::UserJoined(name) => ServerEvent::UserJoined(name),
            Notification::GameStarted(name) => ServerEvent::GameStarted(name),
            Notification::NextPlayer(name) => ServerEvent::NextPlayer(name),
            Notification::GameAlreadyStarted => ServerEvent::GameAlreadyStarted,
            Notification::BannedWordAdded(word) => ServerEvent::BannedWordAdded(word),
        }
    }
}

impl From<Participant> for ParticipantDetailDto {
    fn from(model: Participant) -> Self {
        Self {
            joined_at: millis_to_jst_rfc3339(model.joined_at.value()),
            connection_id: model.connection_id.into_string(),
            display_name: model.display_name.into_string(),
        }
    }
}

impl From<SessionSnapshot> for SessionSnapshotDto {
    fn from(snapshot: SessionSnapshot) -> Self {
        let status = match snapshot.status {
            GameStatus::NotStarted => "notStarted",
            GameStatus::InProgress => "inProgress",
        };
        Self {
            status: status.to_string(),
            connections: snapshot.connections,
            users: snapshot.participants.into_iter().map(Into::into).collect(),
            turn_order: snapshot.turn_order,
            current_player: snapshot.current_player,
            messages: snapshot.messages.into_iter().map(Into::into).collect(),
            banned_word_count: snapshot.banned_word_count,
        }
    }
}
