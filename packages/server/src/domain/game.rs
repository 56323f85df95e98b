//! Turn-based shiritori state machine.
//!
//! ```text
//! NotStarted --start--> InProgress --(terminal word | third repeat | reset)--> NotStarted
//! ```
//!
//! The session is reusable indefinitely; every return to `NotStarted` clears
//! the turn order and word usage counts. Content filtering and the escape
//! marker are applied before a submission reaches [`GameSession::play_turn`].

use std::collections::HashMap;

use super::{entity::Participant, rng::DeterministicRng, value_object::Word};

/// A word ending with this character breaks the chain and resets the round.
pub const TERMINAL_CHAR: char = 'ん';

/// Text starting with this marker is plain chat and skips the game rules.
pub const ESCAPE_MARKER: char = '/';

/// Usage count at which the submitter only gets a private warning.
const WARNING_USAGE: u32 = 2;

/// Usage count that ends the game.
const GAME_OVER_USAGE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started { first_player: Participant },
    AlreadyInProgress,
    NoParticipants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// First use of the word: the turn passes to `next_player`.
    Accepted { next_player: Participant },
    /// Second use: the submitter is warned and keeps the turn.
    Warned,
    /// Third use: the session has been reset.
    GameOver,
    /// The word ended with [`TERMINAL_CHAR`]: the session has been reset.
    ChainBroken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnRejection {
    NotStarted,
    OutOfTurn,
}

#[derive(Debug, Default)]
pub struct GameSession {
    status: GameStatus,
    /// Frozen at start; untouched by later joins and leaves.
    turn_order: Vec<Participant>,
    current_turn_index: usize,
    word_usage_counts: HashMap<String, u32>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze `roster` as the turn order and pick who goes first.
    pub fn start(
        &mut self,
        roster: &[Participant],
        rng: &mut dyn DeterministicRng,
    ) -> StartOutcome {
        if self.status == GameStatus::InProgress {
            return StartOutcome::AlreadyInProgress;
        }
        if roster.is_empty() {
            return StartOutcome::NoParticipants;
        }

        self.turn_order = roster.to_vec();
        self.current_turn_index = rng.next_index(self.turn_order.len()) % self.turn_order.len();
        self.word_usage_counts.clear();
        self.status = GameStatus::InProgress;

        StartOutcome::Started {
            first_player: self.turn_order[self.current_turn_index].clone(),
        }
    }

    /// Apply a word submitted under `display_name`.
    ///
    /// Rejections leave the session untouched.
    pub fn play_turn(
        &mut self,
        display_name: &str,
        word: &Word,
    ) -> Result<TurnOutcome, TurnRejection> {
        let Some(current) = self.current_player() else {
            return Err(TurnRejection::NotStarted);
        };
        if current.name() != display_name {
            return Err(TurnRejection::OutOfTurn);
        }

        if word.as_str().ends_with(TERMINAL_CHAR) {
            self.reset();
            return Ok(TurnOutcome::ChainBroken);
        }

        let count = self
            .word_usage_counts
            .entry(word.as_str().to_string())
            .or_insert(0);
        *count += 1;

        match *count {
            n if n >= GAME_OVER_USAGE => {
                self.reset();
                Ok(TurnOutcome::GameOver)
            }
            WARNING_USAGE => Ok(TurnOutcome::Warned),
            _ => {
                self.current_turn_index = (self.current_turn_index + 1) % self.turn_order.len();
                Ok(TurnOutcome::Accepted {
                    next_player: self.turn_order[self.current_turn_index].clone(),
                })
            }
        }
    }

    /// Back to `NotStarted` with all per-round data cleared.
    pub fn reset(&mut self) {
        self.status = GameStatus::NotStarted;
        self.turn_order.clear();
        self.current_turn_index = 0;
        self.word_usage_counts.clear();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn turn_order(&self) -> &[Participant] {
        &self.turn_order
    }

    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// Turn holder, `None` unless in progress.
    pub fn current_player(&self) -> Option<&Participant> {
        match self.status {
            GameStatus::InProgress => self.turn_order.get(self.current_turn_index),
            GameStatus::NotStarted => None,
        }
    }

    pub fn usage_count(&self, word: &str) -> u32 {
        self.word_usage_counts.get(word).copied().unwrap_or(0)
    }
}
