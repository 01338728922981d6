//! Dailybot Channels — turning a problem into a chat message.
//!
//! This crate provides:
//! - **formatting**: `ContentTransformer`, LeetCode HTML → Discord markdown
//! - **base**: the `Publisher` trait and the message handed to it
//! - **discord**: `DiscordWebhook`, a webhook-backed publisher

pub mod base;
pub mod discord;
pub mod formatting;

pub use base::{ChallengeMessage, PublishReceipt, Publisher};
pub use discord::DiscordWebhook;
pub use formatting::{html_to_discord_markdown, ContentTransformer, Rendered};
