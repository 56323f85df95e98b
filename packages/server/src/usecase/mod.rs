//! UseCase 層
//!
//! セッション状態はすべて [`SessionActor`] が所有し、クライアントからの
//! イベントは [`SessionHandle`] 経由のコマンドとして直列に処理される。

pub mod add_banned_word;
pub mod banned_word_store;
pub mod broadcaster;
pub mod connect_participant;
pub mod disconnect_participant;
pub mod error;
pub mod handle;
pub mod send_message;
pub mod session;
pub mod start_game;

#[cfg(test)]
pub(crate) mod test_support;

pub use banned_word_store::BannedWordStore;
pub use broadcaster::Broadcaster;
pub use error::{SessionClosed, SessionError};
pub use handle::SessionHandle;
pub use session::{SessionActor, SessionCommand, SessionSnapshot};
