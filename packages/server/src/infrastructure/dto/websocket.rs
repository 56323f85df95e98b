//! WebSocket のフレーム形式
//!
//! すべてのフレームは `{"event": <name>, "data": <payload>}` の JSON テキスト。
//! ペイロードのないイベントは `data` を省略する。

use serde::{Deserialize, Serialize};

/// チャット欄の 1 行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub display_name: String,
    pub text: String,
}

/// クライアント → サーバー
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    Join(String),
    Message(ChatMessageDto),
    StartGame,
    AddBannedWord(String),
}

/// サーバー → クライアント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    Message(ChatMessageDto),
    UpdateMessages(Vec<ChatMessageDto>),
    ResetGame,
    GameOver,
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
