//! UseCase: 接続と参加（join）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - `SessionActor::connect()` / `SessionActor::join()`
//! - 禁止ワードを含む表示名の拒否、参加者一覧・接続数の通知、履歴の再送
//!
//! ### なぜこのテストが必要か
//! - 不適切な名前の参加者が作られないことを保証する
//! - 途中参加者にも同じ履歴・状態が見えることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加、ゲーム進行中の途中参加
//! - 異常系：禁止ワードを含む名前、空の名前、未登録の接続
//! - エッジケース：同じ接続からの再 join（名前の置き換え）

use crate::domain::{
    ConnectionId, DisplayName, Notification, Participant, PusherChannel, Timestamp,
    registry::JoinOutcome,
};

use super::{error::SessionError, session::SessionActor};

impl SessionActor {
    /// トランスポート接続を登録し、接続数を全員に通知する
    pub async fn connect(&mut self, connection_id: ConnectionId, sender: PusherChannel) {
        if !self.registry.connect(connection_id.clone()) {
            tracing::warn!(connection_id = %connection_id, "Connection registered twice");
            return;
        }
        self.broadcaster
            .register(connection_id.clone(), sender)
            .await;
        tracing::info!(
            connection_id = %connection_id,
            connections = self.registry.count(),
            "A user connected"
        );
        self.broadcaster
            .to_all(
                &self.registry,
                Notification::UpdateConnections(self.registry.count()),
            )
            .await;
    }

    /// 表示名を決めて参加する
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 参加成功
    /// * `Err(SessionError::RejectedName)` - 表示名に禁止ワードが含まれる
    /// * `Err(SessionError::InvalidInput)` - 表示名が空・長すぎる
    /// * `Err(SessionError::NotConnected)` - 未登録の接続
    pub async fn join(
        &mut self,
        connection_id: &ConnectionId,
        display_name: String,
    ) -> Result<Participant, SessionError> {
        // 1. 禁止ワードチェック（部分一致）
        if self.banned_words.contains(&display_name) {
            return Err(SessionError::RejectedName);
        }
        let display_name = DisplayName::new(display_name)?;

        // 2. 参加者を登録
        let participant = Participant::new(
            connection_id.clone(),
            display_name,
            Timestamp::new(self.clock.now_millis()),
        );
        match self.registry.join(participant.clone()) {
            Some(JoinOutcome::Joined) => {
                tracing::info!(connection_id = %connection_id, name = participant.name(), "User joined");
            }
            Some(JoinOutcome::Renamed { previous }) => {
                tracing::info!(
                    connection_id = %connection_id,
                    previous = %previous,
                    name = participant.name(),
                    "User re-joined under a new name"
                );
            }
            None => {
                return Err(SessionError::NotConnected(connection_id.to_string()));
            }
        }

        // 3. 全員に接続数・参加者一覧・参加通知
        self.broadcaster
            .to_all(
                &self.registry,
                Notification::UpdateConnections(self.registry.count()),
            )
            .await;
        self.broadcaster
            .to_all(&self.registry, Notification::UpdateUsers(self.registry.list()))
            .await;
        self.broadcaster
            .to_all(
                &self.registry,
                Notification::UserJoined(participant.name().to_string()),
            )
            .await;

        // 4. 本人にだけ履歴（と進行中であればその旨）を送る
        self.broadcaster
            .to_one(
                connection_id,
                Notification::UpdateMessages(self.message_log.snapshot()),
            )
            .await;
        if self.game.is_in_progress() {
            self.broadcaster
                .to_one(connection_id, Notification::GameAlreadyStarted)
                .await;
        }

        Ok(participant)
    }
}
