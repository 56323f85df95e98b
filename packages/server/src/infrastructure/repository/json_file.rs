//! JSON ファイルによる BannedWordRepository 実装
//!
//! ファイル形式:
//!
//! ```json
//! { "bannedWords": ["baka", "aho"] }
//! ```
//!
//! 読み込み・書き込みともファイル全体を単位とする。ファイルが存在しない場合は
//! 空のリストとして扱う。

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BannedWordRepository, RepositoryError};

/// ファイル上の表現
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BannedWordsFile {
    banned_words: Vec<String>,
}

pub struct JsonFileBannedWordRepository {
    path: PathBuf,
}

impl JsonFileBannedWordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BannedWordRepository for JsonFileBannedWordRepository {
    async fn load(&self) -> Result<Vec<String>, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Banned word file not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RepositoryError::Io(e.to_string())),
        };

        let file: BannedWordsFile =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::Malformed(e.to_string()))?;
        Ok(file.banned_words)
    }

    async fn save(&self, words: Vec<String>) -> Result<(), RepositoryError> {
        let file = BannedWordsFile {
            banned_words: words,
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| RepositoryError::Malformed(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), count = file.banned_words.len(), "Banned word file written");
        Ok(())
    }
}
