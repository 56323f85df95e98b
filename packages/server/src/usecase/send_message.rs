//! UseCase: メッセージ（しりとりのワード）送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - `SessionActor::send_message()` メソッド
//! - 禁止ワードフィルタ、エスケープ（`/` で始まる雑談）、手番チェック、
//!   「ん」で終わるワードによるリセット、同じワードの繰り返しに対する段階的な処理
//!
//! ### なぜこのテストが必要か
//! - ゲームのルールの中核であり、全クライアントの表示の一貫性がここで決まる
//! - 通知が全員宛てか本人宛てかを取り違えると他の参加者の画面が壊れる
//!
//! ### どのような状況を想定しているか
//! - 正常系：手番の参加者による初出のワード
//! - 異常系：手番外の投稿、禁止ワード、ゲーム開始前の投稿
//! - エッジケース：2 回目（警告）・3 回目（ゲームオーバー）、「ん」で終わるワード

use crate::domain::{ChatMessage, ConnectionId, ESCAPE_MARKER, Notification, TurnOutcome, TurnRejection, Word};

use super::{error::SessionError, session::SessionActor};

impl SessionActor {
    /// `display_name` としてテキストを投稿する
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 送信元の接続（警告・エラーの宛先）
    /// * `display_name` - ペイロードで名乗った表示名（手番の判定に使う）
    /// * `text` - 投稿テキスト
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 受理された（結果の通知は送信済み）
    /// * `Err(SessionError)` - 拒否された（状態は変わらない）
    pub async fn send_message(
        &mut self,
        connection_id: &ConnectionId,
        display_name: String,
        text: String,
    ) -> Result<(), SessionError> {
        // 1. 禁止ワードチェック（エスケープされた雑談も対象）
        if self.banned_words.contains(&text) {
            return Err(SessionError::RejectedContent);
        }

        // 2. エスケープされた雑談は手番・しりとりのルールを通さない
        if let Some(chat) = text.strip_prefix(ESCAPE_MARKER) {
            let message = ChatMessage::new(display_name, chat);
            self.message_log.append(message.clone());
            self.broadcaster
                .to_all(&self.registry, Notification::Message(message))
                .await;
            return Ok(());
        }

        // 3. 手番とワードの判定
        let word = Word::new(text)?;
        let outcome = self
            .game
            .play_turn(&display_name, &word)
            .map_err(|rejection| match rejection {
                TurnRejection::NotStarted => SessionError::GameNotStarted,
                TurnRejection::OutOfTurn => SessionError::OutOfTurn,
            })?;

        match outcome {
            TurnOutcome::ChainBroken => {
                tracing::info!(word = word.as_str(), by = %display_name, "Game reset: word ends with the terminal character");
                self.reset_round().await;
            }
            TurnOutcome::GameOver => {
                tracing::info!(word = word.as_str(), by = %display_name, "Game over: word used three times");
                self.reset_round().await;
                self.broadcaster
                    .to_all(&self.registry, Notification::GameOver)
                    .await;
            }
            TurnOutcome::Warned => {
                tracing::info!(word = word.as_str(), by = %display_name, "Warning: word used twice");
                self.broadcaster
                    .to_one(connection_id, Notification::Warning(word.into_string()))
                    .await;
            }
            TurnOutcome::Accepted { next_player } => {
                let message = ChatMessage::new(display_name, word.into_string());
                self.message_log.append(message.clone());
                self.broadcaster
                    .to_all(&self.registry, Notification::Message(message))
                    .await;
                tracing::info!(next_player = next_player.name(), "Next player");
                self.broadcaster
                    .to_all(
                        &self.registry,
                        Notification::NextPlayer(next_player.name().to_string()),
                    )
                    .await;
            }
        }

        Ok(())
    }
}
