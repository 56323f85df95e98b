//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::ChatMessageDto;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDetailDto {
    pub connection_id: String,
    pub display_name: String,
    /// RFC 3339 (JST)
    pub joined_at: String,
}

/// `GET /debug/session`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotDto {
    /// `"notStarted"` or `"inProgress"`
    pub status: String,
    pub connections: usize,
    pub users: Vec<ParticipantDetailDto>,
    pub turn_order: Vec<String>,
    pub current_player: Option<String>,
    pub messages: Vec<ChatMessageDto>,
    pub banned_word_count: usize,
}
