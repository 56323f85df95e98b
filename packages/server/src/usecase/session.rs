//! Session actor.
//!
//! Owns every piece of mutable game state: the connection registry, the game
//! session, the message log and the banned word store. Connections never touch
//! that state directly; they send [`SessionCommand`]s over one channel and the
//! actor applies them strictly one at a time, in arrival order.
//!
//! Each inbound event has its own `impl SessionActor` block in a sibling
//! module (`connect_participant`, `send_message`, ...).

use std::sync::Arc;

use shiritori_shared::time::Clock;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{
    ChatMessage, ConnectionId, ConnectionRegistry, DeterministicRng, GameSession, GameStatus,
    MessageLog, MessagePusher, Notification, Participant, PusherChannel,
};

use super::{
    banned_word_store::BannedWordStore, broadcaster::Broadcaster, error::SessionError,
    handle::SessionHandle,
};

/// Everything a connection can ask of the session.
#[derive(Debug)]
pub enum SessionCommand {
    Connect {
        connection_id: ConnectionId,
        sender: PusherChannel,
    },
    Disconnect {
        connection_id: ConnectionId,
    },
    Join {
        connection_id: ConnectionId,
        display_name: String,
    },
    Message {
        connection_id: ConnectionId,
        display_name: String,
        text: String,
    },
    StartGame {
        connection_id: ConnectionId,
    },
    AddBannedWord {
        connection_id: ConnectionId,
        word: String,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Read-only copy of the session state, for the debug endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub connections: usize,
    pub participants: Vec<Participant>,
    pub turn_order: Vec<String>,
    pub current_player: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub banned_word_count: usize,
}

pub struct SessionActor {
    pub(super) registry: ConnectionRegistry,
    pub(super) game: GameSession,
    pub(super) message_log: MessageLog,
    pub(super) banned_words: BannedWordStore,
    pub(super) broadcaster: Broadcaster,
    pub(super) rng: Box<dyn DeterministicRng>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SessionActor {
    pub fn new(
        banned_words: BannedWordStore,
        pusher: Arc<dyn MessagePusher>,
        rng: Box<dyn DeterministicRng>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            game: GameSession::new(),
            message_log: MessageLog::new(),
            banned_words,
            broadcaster: Broadcaster::new(pusher),
            rng,
            clock,
        }
    }

    /// Run the actor on its own task and return a handle to it.
    pub fn spawn(self) -> SessionHandle {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        tokio::spawn(self.run(commands_rx));
        SessionHandle::new(commands_tx)
    }

    /// Process commands until every handle has been dropped.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<SessionCommand>) {
        tracing::info!("Session actor started");
        while let Some(command) = commands.recv().await {
            self.dispatch(command).await;
        }
        tracing::info!("Session actor stopped");
    }

    /// Apply one command. Failures are reported privately to the originating
    /// connection.
    pub async fn dispatch(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Connect {
                connection_id,
                sender,
            } => self.connect(connection_id, sender).await,
            SessionCommand::Disconnect { connection_id } => self.disconnect(&connection_id).await,
            SessionCommand::Join {
                connection_id,
                display_name,
            } => {
                let result = self.join(&connection_id, display_name).await.map(|_| ());
                self.report(&connection_id, result).await;
            }
            SessionCommand::Message {
                connection_id,
                display_name,
                text,
            } => {
                let result = self.send_message(&connection_id, display_name, text).await;
                self.report(&connection_id, result).await;
            }
            SessionCommand::StartGame { connection_id } => self.start_game(&connection_id).await,
            SessionCommand::AddBannedWord {
                connection_id,
                word,
            } => {
                let result = self.add_banned_word(word).await;
                self.report(&connection_id, result).await;
            }
            SessionCommand::Snapshot { reply } => {
                if reply.send(self.snapshot()).is_err() {
                    tracing::debug!("Snapshot requester went away");
                }
            }
        }
    }

    async fn report(&self, connection_id: &ConnectionId, result: Result<(), SessionError>) {
        if let Err(error) = result {
            tracing::info!(connection_id = %connection_id, error = %error, "Rejected client event");
            self.broadcaster
                .to_one(connection_id, Notification::Error(error.to_string()))
                .await;
        }
    }

    /// Clear all per-round data and tell everyone.
    pub(super) async fn reset_round(&mut self) {
        self.game.reset();
        self.message_log.clear();
        self.broadcaster
            .to_all(&self.registry, Notification::ResetGame)
            .await;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.game.status(),
            connections: self.registry.count(),
            participants: self.registry.participants().to_vec(),
            turn_order: self
                .game
                .turn_order()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
            current_player: self.game.current_player().map(|p| p.name().to_string()),
            messages: self.message_log.snapshot(),
            banned_word_count: self.banned_words.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{Delivery, TestSession};

    #[tokio::test]
    async fn test_dispatch_reports_errors_privately() {
        // テスト項目: 失敗したコマンドはエラーとして送信元にだけ通知される
        // given (前提条件):
        let mut session = TestSession::new(&["baka"], vec![0]).await;
        let alice = session.connect("alice").await;
        let bob = session.connect("bob").await;
        session.pusher.clear();

        // when (操作):
        session
            .actor
            .dispatch(SessionCommand::Join {
                connection_id: alice.clone(),
                display_name: "bakabon".to_string(),
            })
            .await;

        // then (期待する結果):
        assert_eq!(
            session.pusher.deliveries(),
            vec![Delivery::Direct(
                alice,
                Notification::Error(SessionError::RejectedName.to_string())
            )]
        );
        assert!(session.pusher.direct_to(&bob).is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_command_replies_with_state() {
        // テスト項目: Snapshot コマンドで現在の状態が返される
        // given (前提条件):
        let mut session = TestSession::new(&[], vec![0]).await;
        let alice = session.connect("alice").await;
        session.join(&alice, "Alice").await;
        let (reply, receiver) = oneshot::channel();

        // when (操作):
        session
            .actor
            .dispatch(SessionCommand::Snapshot { reply })
            .await;

        // then (期待する結果):
        let snapshot = receiver.await.unwrap();
        assert_eq!(snapshot.status, GameStatus::NotStarted);
        assert_eq!(snapshot.connections, 1);
        assert_eq!(snapshot.participants.len(), 1);
        assert_eq!(snapshot.participants[0].name(), "Alice");
        assert_eq!(snapshot.current_player, None);
    }

    #[tokio::test]
    async fn test_spawned_actor_processes_commands_in_order() {
        // テスト項目: spawn したアクターが受信順にコマンドを処理する
        // given (前提条件):
        let session = TestSession::new(&[], vec![0]).await;
        let pusher = session.pusher.clone();
        let handle = session.actor.spawn();
        let alice = ConnectionId::new("alice".to_string()).unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        handle.connect(alice.clone(), tx).unwrap();
        handle.join(alice.clone(), "Alice".to_string()).unwrap();
        handle.start_game(alice.clone()).unwrap();
        let snapshot = handle.snapshot().await.unwrap();

        // then (期待する結果):
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.current_player, Some("Alice".to_string()));
        assert!(
            pusher
                .broadcasts()
                .contains(&Notification::GameStarted("Alice".to_string()))
        );
    }
}
