//! Domain layer: game rules and the seams the outer layers plug into.

pub mod banned_word;
pub mod entity;
pub mod error;
pub mod game;
pub mod message_log;
pub mod notification;
pub mod pusher;
pub mod registry;
pub mod repository;
pub mod rng;
pub mod value_object;

pub use banned_word::BannedWordList;
pub use entity::{ChatMessage, Participant};
pub use error::{MessagePushError, RepositoryError, ValueObjectError};
pub use game::{
    ESCAPE_MARKER, GameSession, GameStatus, StartOutcome, TERMINAL_CHAR, TurnOutcome,
    TurnRejection,
};
pub use message_log::MessageLog;
pub use notification::Notification;
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::ConnectionRegistry;
pub use repository::BannedWordRepository;
pub use rng::DeterministicRng;
pub use value_object::{BannedWord, ConnectionId, DisplayName, Timestamp, Word};
