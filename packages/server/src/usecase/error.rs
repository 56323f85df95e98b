//! UseCase 層のエラー定義
//!
//! どのエラーも発生元の接続にだけ `error` として通知され、
//! 他の参加者の状態には影響しない。

use thiserror::Error;

use crate::domain::ValueObjectError;

/// セッション操作の失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// 表示名に禁止ワードが含まれている
    #[error("That display name is not allowed")]
    RejectedName,

    /// 投稿に禁止ワードが含まれている
    #[error("That word is not allowed")]
    RejectedContent,

    /// 手番ではない参加者がワードを投稿した
    #[error("It is not your turn, so you cannot play a word")]
    OutOfTurn,

    /// ゲーム開始前にワードを投稿した
    #[error("The game has not started yet")]
    GameNotStarted,

    /// 既に登録済みの禁止ワード（完全一致）
    #[error("'{0}' is already banned")]
    DuplicateBannedWord(String),

    /// 禁止ワードの永続化に失敗した（メモリ上には追加済み）
    #[error("Failed to save banned word '{0}'")]
    PersistFailure(String),

    /// 登録されていない接続からの操作
    #[error("Connection '{0}' is not registered")]
    NotConnected(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValueObjectError),
}

/// セッションアクターが停止している
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Session actor is no longer running")]
pub struct SessionClosed;
