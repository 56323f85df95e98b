//! Shiritori session server library.
//!
//! A real-time word-chain game coordinated over WebSocket. All game state is
//! owned by a single session actor; connections talk to it through a channel.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
