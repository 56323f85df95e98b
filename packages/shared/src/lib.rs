//! Utilities shared across the Shiritori packages.

pub mod logger;
pub mod time;
