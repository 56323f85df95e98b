//! Test doubles shared by the usecase tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shiritori_shared::time::FixedClock;
use tokio::sync::mpsc;

use crate::domain::{
    ConnectionId, DeterministicRng, MessagePushError, MessagePusher, Notification, PusherChannel,
    repository::MockBannedWordRepository,
};

use super::{banned_word_store::BannedWordStore, session::SessionActor};

pub(crate) const TEST_NOW_MILLIS: i64 = 1_672_498_800_000;

/// What the session asked the pusher to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Delivery {
    Broadcast(Notification),
    Direct(ConnectionId, Notification),
}

/// Records deliveries instead of sending them.
#[derive(Default)]
pub(crate) struct RecordingPusher {
    deliveries: Mutex<Vec<Delivery>>,
    registrations: Mutex<Vec<ConnectionId>>,
}

impl RecordingPusher {
    pub(crate) fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    pub(crate) fn broadcasts(&self) -> Vec<Notification> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Broadcast(n) => Some(n),
                Delivery::Direct(..) => None,
            })
            .collect()
    }

    pub(crate) fn direct_to(&self, connection_id: &ConnectionId) -> Vec<Notification> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Direct(id, n) if &id == connection_id => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Every `register_client` call, in order. Not affected by `clear`.
    pub(crate) fn registrations(&self) -> Vec<ConnectionId> {
        self.registrations.lock().unwrap().clone()
    }

    pub(crate) fn clear(&self) {
        self.deliveries.lock().unwrap().clear();
    }
}

#[async_trait]
impl MessagePusher for RecordingPusher {
    async fn register_client(&self, connection_id: ConnectionId, _sender: PusherChannel) {
        self.registrations.lock().unwrap().push(connection_id);
    }

    async fn unregister_client(&self, _connection_id: &ConnectionId) {}

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError> {
        self.deliveries
            .lock()
            .unwrap()
            .push(Delivery::Direct(connection_id.clone(), notification.clone()));
        Ok(())
    }

    async fn broadcast(
        &self,
        _targets: Vec<ConnectionId>,
        notification: &Notification,
    ) -> Result<(), MessagePushError> {
        self.deliveries
            .lock()
            .unwrap()
            .push(Delivery::Broadcast(notification.clone()));
        Ok(())
    }
}

/// Returns scripted picks in order, cycling when exhausted.
pub(crate) struct SequenceRng {
    picks: Vec<usize>,
    index: usize,
}

impl SequenceRng {
    pub(crate) fn new(picks: Vec<usize>) -> Self {
        Self { picks, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.index % self.picks.len()];
        self.index += 1;
        pick % upper
    }
}

/// A session actor wired to test doubles.
pub(crate) struct TestSession {
    pub(crate) actor: SessionActor,
    pub(crate) pusher: Arc<RecordingPusher>,
}

impl TestSession {
    /// Session whose banned word file holds `banned` and accepts every write.
    pub(crate) async fn new(banned: &[&str], picks: Vec<usize>) -> Self {
        let words: Vec<String> = banned.iter().map(|w| w.to_string()).collect();
        let mut repository = MockBannedWordRepository::new();
        repository
            .expect_load()
            .returning(move || Ok(words.clone()));
        repository.expect_save().returning(|_| Ok(()));
        Self::with_repository(repository, picks).await
    }

    pub(crate) async fn with_repository(
        repository: MockBannedWordRepository,
        picks: Vec<usize>,
    ) -> Self {
        let pusher = Arc::new(RecordingPusher::default());
        let banned_words = BannedWordStore::load(Arc::new(repository)).await;
        let actor = SessionActor::new(
            banned_words,
            pusher.clone(),
            Box::new(SequenceRng::new(picks)),
            Arc::new(FixedClock::new(TEST_NOW_MILLIS)),
        );
        Self { actor, pusher }
    }

    pub(crate) async fn connect(&mut self, id: &str) -> ConnectionId {
        let connection_id = ConnectionId::new(id.to_string()).unwrap();
        let (sender, _receiver) = mpsc::unbounded_channel();
        self.actor.connect(connection_id.clone(), sender).await;
        connection_id
    }

    pub(crate) async fn join(&mut self, connection_id: &ConnectionId, name: &str) {
        self.actor
            .join(connection_id, name.to_string())
            .await
            .unwrap();
    }

    /// Connect and join every name, then start with the scripted pick.
    /// Deliveries recorded so far are cleared.
    pub(crate) async fn started(&mut self, names: &[&str]) -> Vec<ConnectionId> {
        let mut ids = Vec::new();
        for name in names {
            let id = self.connect(&name.to_lowercase()).await;
            self.join(&id, name).await;
            ids.push(id);
        }
        self.actor.start_game(&ids[0]).await;
        self.pusher.clear();
        ids
    }
}
