//! Typed errors shared across the workspace.
//!
//! Clients and services return `anyhow::Result` and attach these as the
//! root cause, so callers can still `downcast_ref::<BotError>()`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BotError {
    #[error("discord webhook URL is not set (discord.webhookUrl or DISCORD_WEBHOOK_URL)")]
    MissingWebhookUrl,

    #[error("discord webhook URL is not an http(s) URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("thread creation requires a bot token (discord.botToken or DISCORD_BOT_TOKEN)")]
    MissingBotToken,

    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = BotError::UnexpectedStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "unexpected status code 502: bad gateway");
    }

    #[test]
    fn test_missing_webhook_mentions_env_var() {
        assert!(BotError::MissingWebhookUrl
            .to_string()
            .contains("DISCORD_WEBHOOK_URL"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(BotError::MissingBotToken);
        assert_eq!(
            err.downcast_ref::<BotError>(),
            Some(&BotError::MissingBotToken)
        );
    }
}
