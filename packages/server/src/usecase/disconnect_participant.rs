//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - `SessionActor::disconnect()`
//! - 接続・参加者の削除と、残りの参加者への通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断
//! - エッジケース：ゲーム進行中の手番保持者の切断（手番順は変わらない）
//! - 異常系：未登録の接続の切断（何もしない）

use crate::domain::{ConnectionId, Notification};

use super::session::SessionActor;

impl SessionActor {
    /// 接続を削除し、接続数と参加者一覧を全員に通知する
    ///
    /// 進行中のゲームの手番順は変更しない。切断した参加者の手番が来ると
    /// ゲームはそこで止まる。
    pub async fn disconnect(&mut self, connection_id: &ConnectionId) {
        self.broadcaster.unregister(connection_id).await;

        let name = self
            .registry
            .participant(connection_id)
            .map(|p| p.name().to_string());
        if !self.registry.leave(connection_id) {
            tracing::debug!(connection_id = %connection_id, "Unknown connection disconnected");
            return;
        }

        let holds_turn = self
            .game
            .current_player()
            .is_some_and(|p| &p.connection_id == connection_id);
        if holds_turn {
            tracing::warn!(
                connection_id = %connection_id,
                "Current turn holder disconnected; the round cannot continue until reset"
            );
        }
        tracing::info!(
            connection_id = %connection_id,
            name = name.as_deref().unwrap_or("-"),
            connections = self.registry.count(),
            "A user disconnected"
        );

        self.broadcaster
            .to_all(
                &self.registry,
                Notification::UpdateConnections(self.registry.count()),
            )
            .await;
        self.broadcaster
            .to_all(&self.registry, Notification::UpdateUsers(self.registry.list()))
            .await;
    }
}
