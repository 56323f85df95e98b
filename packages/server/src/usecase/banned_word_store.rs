//! 禁止ワードストア
//!
//! メモリ上の `BannedWordList` と永続化先の `BannedWordRepository` をまとめる。
//! 追加はセッションアクター内で直列に実行されるため、
//! 「重複チェック → 追加 → 永続化」が他の操作と交錯することはない。

use std::sync::Arc;

use crate::domain::{BannedWord, BannedWordList, BannedWordRepository};

use super::error::SessionError;

pub struct BannedWordStore {
    words: BannedWordList,
    repository: Arc<dyn BannedWordRepository>,
}

impl BannedWordStore {
    /// 起動時に一度だけ読み込む
    ///
    /// 読み込みに失敗した場合は空のリストで開始する（ログに残すが致命的ではない）。
    pub async fn load(repository: Arc<dyn BannedWordRepository>) -> Self {
        let words = match repository.load().await {
            Ok(raw) => {
                let loaded = raw.len();
                let words = BannedWordList::from_loaded(raw);
                if words.len() != loaded {
                    tracing::warn!(
                        loaded,
                        kept = words.len(),
                        "Dropped blank or duplicate banned words"
                    );
                }
                tracing::info!(count = words.len(), "Banned words loaded");
                words
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load banned words, starting with an empty list");
                BannedWordList::new()
            }
        };

        Self { words, repository }
    }

    /// `text` に禁止ワードが含まれるか（大文字小文字を区別しない部分一致）
    pub fn contains(&self, text: &str) -> bool {
        self.words.matches(text)
    }

    /// 禁止ワードを追加して永続化する
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 追加・永続化とも成功
    /// * `Err(SessionError::DuplicateBannedWord)` - 完全一致の登録済みワード
    /// * `Err(SessionError::PersistFailure)` - 書き込み失敗（メモリ上の追加は取り消さない）
    pub async fn add(&mut self, word: BannedWord) -> Result<(), SessionError> {
        if self.words.contains_exact(word.as_str()) {
            return Err(SessionError::DuplicateBannedWord(word.into_string()));
        }

        let text = word.as_str().to_string();
        self.words.push(word);

        if let Err(e) = self.repository.save(self.words.as_slice().to_vec()).await {
            tracing::error!(word = %text, error = %e, "Failed to persist banned words");
            return Err(SessionError::PersistFailure(text));
        }

        tracing::info!(word = %text, total = self.words.len(), "Banned word added");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
