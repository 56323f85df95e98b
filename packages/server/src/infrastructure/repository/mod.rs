//! Repository 実装
//!
//! - `json_file`: JSON ファイルに禁止ワードを保存する実装

pub mod json_file;

pub use json_file::JsonFileBannedWordRepository;
