//! UseCase: 禁止ワードの追加
//!
//! 追加は即座にフィルタへ反映され、ファイルへ全件書き戻される。

use crate::domain::{BannedWord, Notification};

use super::{error::SessionError, session::SessionActor};

impl SessionActor {
    /// 禁止ワードを追加し、全員に `bannedWordAdded` を通知する
    ///
    /// 永続化に失敗した場合もメモリ上のリストには残るが、通知はせずにエラーを返す。
    pub async fn add_banned_word(&mut self, word: String) -> Result<(), SessionError> {
        let word = BannedWord::new(word)?;
        let text = word.as_str().to_string();
        self.banned_words.add(word).await?;

        self.broadcaster
            .to_all(&self.registry, Notification::BannedWordAdded(text))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{Notification, RepositoryError, ValueObjectError, repository::MockBannedWordRepository},
        usecase::{error::SessionError, test_support::TestSession},
    };

    #[tokio::test]
    async fn test_added_word_is_broadcast_and_filters_immediately() {
        // テスト項目: 追加した禁止ワードが全員に通知され、直後の join・投稿から拒否される
        // given (前提条件):
        let mut session = TestSession::new(&[], vec![0]).await;
        let ids = session.started(&["Alice", "Bob"]).await;
        let carol = session.connect("carol").await;
        session.pusher.clear();

        // when (操作):
        let result = session.actor.add_banned_word("ringo".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        assert_eq!(
            session.pusher.broadcasts(),
            vec![Notification::BannedWordAdded("ringo".to_string())]
        );
        assert_eq!(
            session
                .actor
                .send_message(&ids[0], "Alice".to_string(), "RINGO".to_string())
                .await,
            Err(SessionError::RejectedContent)
        );
        assert_eq!(
            session.actor.join(&carol, "ringo-chan".to_string()).await,
            Err(SessionError::RejectedName)
        );
    }

    #[tokio::test]
    async fn test_duplicate_word_is_rejected_without_broadcast() {
        // テスト項目: 完全一致で登録済みのワードは重複として拒否され、通知されない
        // given (前提条件):
        let mut session = TestSession::new(&["baka"], vec![0]).await;
        session.connect("alice").await;
        session.pusher.clear();

        // when (操作):
        let result = session.actor.add_banned_word("baka".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SessionError::DuplicateBannedWord("baka".to_string()))
        );
        assert!(session.pusher.deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_blank_word_is_rejected() {
        // テスト項目: 空白だけのワードは追加できない
        // given (前提条件):
        let mut session = TestSession::new(&[], vec![0]).await;

        // when (操作):
        let result = session.actor.add_banned_word("   ".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SessionError::InvalidInput(ValueObjectError::Empty(
                "banned word"
            )))
        );
        assert!(session.actor.banned_words.is_empty());
    }

    #[tokio::test]
    async fn test_persist_failure_keeps_word_in_memory() {
        // テスト項目: 書き込みに失敗してもメモリ上のフィルタには反映され、送信元にエラーが返る
        // given (前提条件):
        let mut repository = MockBannedWordRepository::new();
        repository.expect_load().returning(|| Ok(vec![]));
        repository
            .expect_save()
            .returning(|_| Err(RepositoryError::Io("disk full".to_string())));
        let mut session = TestSession::with_repository(repository, vec![0]).await;
        session.connect("alice").await;
        session.pusher.clear();

        // when (操作):
        let result = session.actor.add_banned_word("baka".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Err(SessionError::PersistFailure("baka".to_string())));
        assert!(session.actor.banned_words.contains("BAKA"));
        assert!(session.pusher.deliveries().is_empty());
    }
}
