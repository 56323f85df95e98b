//! Infrastructure 層
//!
//! ドメイン層が定義する trait（`MessagePusher`, `BannedWordRepository`,
//! `DeterministicRng`）の具体的な実装と、ワイヤー形式の DTO。

pub mod dto;
pub mod message_pusher;
pub mod repository;
pub mod rng;
