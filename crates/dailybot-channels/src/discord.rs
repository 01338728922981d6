//! Discord publisher — incoming webhook + optional discussion thread.
//!
//! Posts the daily challenge to a webhook URL. The webhook is called with
//! `?wait=true` so Discord answers with the created message, which lets us
//! open a thread on it through the REST API when a bot token is configured.
//!
//! Features:
//! - Plain-content or embed (difficulty-colored) messages
//! - Bounded retry on rate limits (HTTP 429) and on other failures
//! - Thread creation, best effort

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use dailybot_core::config::DiscordConfig;
use dailybot_core::error::BotError;
use dailybot_core::utils::timestamp;

use crate::base::{ChallengeMessage, PublishReceipt, Publisher};

// ─────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────

/// Attempts per webhook call before giving up on non-429 failures.
const MAX_ATTEMPTS: u32 = 3;

/// Rate-limited responses tolerated per webhook call.
const MAX_RATE_LIMIT_RETRIES: u32 = 5;

const HTTP_TIMEOUT_SECS: u64 = 30;

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WebhookPayload {
    content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    url: String,
    description: String,
    timestamp: String,
    footer: EmbedFooter,
    color: u32,
}

#[derive(Debug, Serialize)]
struct EmbedFooter {
    text: String,
}

/// Subset of the message object returned with `?wait=true`.
#[derive(Debug, Deserialize)]
struct WebhookResponse {
    id: String,
    channel_id: String,
}

#[derive(Debug, Serialize)]
struct ThreadCreatePayload {
    name: String,
    auto_archive_duration: u32,
}

// ─────────────────────────────────────────────
// DiscordWebhook
// ─────────────────────────────────────────────

/// Publishes challenges to a Discord webhook.
pub struct DiscordWebhook {
    config: DiscordConfig,
    http: reqwest::Client,
    /// Pause between attempts after a non-429 failure.
    retry_delay: Duration,
}

impl DiscordWebhook {
    /// Create a publisher. Credentials come from `config` only.
    pub fn new(config: DiscordConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            config,
            http,
            retry_delay: Duration::from_secs(1),
        })
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Webhook URL with `wait=true` appended.
    fn webhook_url(&self) -> String {
        let url = self.config.webhook_url.trim();
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{url}{sep}wait=true")
    }

    fn greeting_line(&self) -> String {
        if self.config.mention.is_empty() {
            self.config.greeting.clone()
        } else {
            format!("{} {}", self.config.mention, self.config.greeting)
        }
    }

    /// Render the plain-content message.
    pub fn render_content(&self, msg: &ChallengeMessage) -> String {
        let q = &msg.question;
        let header = format!("📌 # LeetCode Daily Challenge ({})", msg.date);
        let description = format!(
            "📺 {} {} ({})\n🔗 {}\n\n📝 Question Detail:\n-----------\n👉 {}",
            q.difficulty.emoji(),
            q.title,
            q.difficulty,
            q.url,
            msg.body
        );
        format!("{} \n\n {} \n\n {}", self.greeting_line(), header, description)
    }

    fn build_payload(&self, msg: &ChallengeMessage) -> WebhookPayload {
        if !self.config.use_embed {
            return WebhookPayload {
                content: self.render_content(msg),
                embeds: Vec::new(),
            };
        }

        let q = &msg.question;
        WebhookPayload {
            content: self.greeting_line(),
            embeds: vec![Embed {
                title: format!("{} {} ({})", q.difficulty.emoji(), q.title, q.difficulty),
                url: q.url.clone(),
                description: msg.body.clone(),
                timestamp: timestamp(),
                footer: EmbedFooter {
                    text: format!("LeetCode Daily • {}", msg.date),
                },
                color: q.difficulty.color(),
            }],
        }
    }

    /// POST the payload, retrying on rate limits and transient failures.
    async fn post_webhook(&self, payload: &WebhookPayload) -> anyhow::Result<PublishReceipt> {
        let url = self.webhook_url();

        let mut attempts = 0u32;
        let mut rate_limited = 0u32;
        loop {
            let resp = self
                .http
                .post(&url)
                .json(payload)
                .send()
                .await
                .context("failed to post to discord webhook")?;

            let status = resp.status();

            if status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                let receipt = match serde_json::from_str::<WebhookResponse>(&body) {
                    Ok(r) => PublishReceipt {
                        message_id: Some(r.id),
                        channel_id: Some(r.channel_id),
                    },
                    Err(_) => PublishReceipt::default(),
                };
                return Ok(receipt);
            }

            if status.as_u16() == 429 {
                rate_limited += 1;
                let body_text = resp.text().await.unwrap_or_default();
                if rate_limited > MAX_RATE_LIMIT_RETRIES {
                    return Err(anyhow::Error::new(BotError::UnexpectedStatus {
                        status: 429,
                        body: body_text,
                    }))
                    .context(format!(
                        "discord webhook still rate limited after {MAX_RATE_LIMIT_RETRIES} retries"
                    ));
                }
                let retry_after: f64 = serde_json::from_str::<serde_json::Value>(&body_text)
                    .ok()
                    .and_then(|v| v["retry_after"].as_f64())
                    .unwrap_or(1.0);
                warn!(
                    retry_after_s = retry_after,
                    retry = rate_limited,
                    "discord rate limited"
                );
                tokio::time::sleep(Duration::from_secs_f64(retry_after.clamp(0.0, 60.0))).await;
                continue;
            }

            attempts += 1;
            if attempts >= MAX_ATTEMPTS {
                let body = resp.text().await.unwrap_or_default();
                return Err(anyhow::Error::new(BotError::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                }))
                .context(format!(
                    "discord webhook failed after {MAX_ATTEMPTS} attempts"
                ));
            }

            warn!(
                status = %status,
                attempt = attempts,
                "discord webhook error, retrying"
            );
            tokio::time::sleep(self.retry_delay).await;
        }
    }

    /// Open a discussion thread on a posted message.
    async fn create_thread(
        &self,
        channel_id: &str,
        message_id: &str,
        title: &str,
    ) -> anyhow::Result<()> {
        if !self.config.has_bot_token() {
            return Err(BotError::MissingBotToken.into());
        }

        let url = format!(
            "{}/channels/{channel_id}/messages/{message_id}/threads",
            self.config.api_base.trim_end_matches('/')
        );
        let payload = ThreadCreatePayload {
            name: format!("Discussion: {title}"),
            auto_archive_duration: self.config.thread_auto_archive_minutes,
        };

        let resp = self
            .http
            .post(&url)
            .header("Authorization", format!("Bot {}", self.config.bot_token))
            .json(&payload)
            .send()
            .await
            .context("failed to create discord thread")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BotError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        debug!(channel_id, message_id, "discord thread created");
        Ok(())
    }
}

#[async_trait]
impl Publisher for DiscordWebhook {
    fn name(&self) -> &str {
        "discord"
    }

    async fn publish(&self, msg: &ChallengeMessage) -> anyhow::Result<PublishReceipt> {
        let payload = self.build_payload(msg);
        let receipt = self.post_webhook(&payload).await?;

        info!(
            title = %msg.question.title,
            difficulty = %msg.question.difficulty,
            message_id = receipt.message_id.as_deref().unwrap_or("?"),
            "posted daily challenge to discord"
        );

        if self.config.create_thread {
            match (&receipt.channel_id, &receipt.message_id) {
                (Some(channel_id), Some(message_id)) => {
                    if let Err(e) = self
                        .create_thread(channel_id, message_id, &msg.question.title)
                        .await
                    {
                        warn!(error = %e, "discord thread creation failed");
                    }
                }
                _ => warn!("discord did not return a message id, skipping thread"),
            }
        }

        Ok(receipt)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
