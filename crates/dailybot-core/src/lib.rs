//! Dailybot Core — shared building blocks for the other crates.
//!
//! - **config**: schema, JSON loading and env var overrides
//! - **error**: `BotError`, the typed failures surfaced to the CLI
//! - **types**: the daily challenge model and difficulty decoration
//! - **utils**: paths, dates, timestamps

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use error::BotError;
pub use types::{DailyChallenge, Difficulty, Question};
