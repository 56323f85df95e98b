//! Repository trait 定義
//!
//! 禁止ワードリストの永続化インターフェース。ファイル形式などの詳細は
//! Infrastructure 層が持ちます。

use async_trait::async_trait;

use super::error::RepositoryError;

/// 禁止ワードの永続化ストア
///
/// 読み込みも書き込みもリスト全体を単位とする。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BannedWordRepository: Send + Sync {
    /// 保存済みの全ワードを読み込む
    async fn load(&self) -> Result<Vec<String>, RepositoryError>;

    /// リスト全体を書き込む
    async fn save(&self, words: Vec<String>) -> Result<(), RepositoryError>;
}
