//! UseCase: ゲーム開始

use crate::domain::{ConnectionId, Notification, StartOutcome};

use super::session::SessionActor;

impl SessionActor {
    /// 現在の参加者一覧を手番順として固定し、最初の手番をランダムに決める
    ///
    /// 進行中、または参加者がいない場合は何もしない。
    pub async fn start_game(&mut self, connection_id: &ConnectionId) {
        match self
            .game
            .start(self.registry.participants(), self.rng.as_mut())
        {
            StartOutcome::Started { first_player } => {
                tracing::info!(
                    requested_by = %connection_id,
                    first_player = first_player.name(),
                    players = self.game.turn_order().len(),
                    "Game started"
                );
                self.broadcaster
                    .to_all(
                        &self.registry,
                        Notification::GameStarted(first_player.name().to_string()),
                    )
                    .await;
            }
            StartOutcome::AlreadyInProgress => {
                tracing::debug!(requested_by = %connection_id, "Game already in progress");
            }
            StartOutcome::NoParticipants => {
                tracing::debug!(requested_by = %connection_id, "No participants to start a game with");
            }
        }
    }
}
