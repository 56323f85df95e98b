//! ドメイン層のエラー定義

use thiserror::Error;

/// 値オブジェクトの生成に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// クライアントへのメッセージ送信に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    #[error("Failed to push message: {0}")]
    PushFailed(String),

    #[error("Failed to serialize notification: {0}")]
    Serialization(String),
}

/// 禁止ワードの永続化ストアへのアクセスに失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("malformed banned word file: {0}")]
    Malformed(String),
}
