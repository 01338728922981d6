//! Daily run orchestration — fetch → transform → publish.
//!
//! One call to [`DailyBotService::process_daily_challenge`] is one run.
//! Scheduling and re-runs are left to whatever invokes the binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use dailybot_channels::{
    ChallengeMessage, ContentTransformer, DiscordWebhook, PublishReceipt, Publisher,
};
use dailybot_core::config::Config;
use dailybot_core::utils::format_date;
use dailybot_providers::{LeetCodeClient, ProblemSource};

/// Wires a problem source to a publisher through the content transformer.
pub struct DailyBotService {
    source: Arc<dyn ProblemSource>,
    publisher: Arc<dyn Publisher>,
    transformer: ContentTransformer,
}

impl DailyBotService {
    pub fn new(
        source: Arc<dyn ProblemSource>,
        publisher: Arc<dyn Publisher>,
        transformer: ContentTransformer,
    ) -> Self {
        Self {
            source,
            publisher,
            transformer,
        }
    }

    /// Build the LeetCode → Discord service from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        for warning in config.warnings() {
            warn!("{warning}");
        }

        let source = LeetCodeClient::new(&config.leetcode.api_base)?;
        let publisher = DiscordWebhook::new(config.discord.clone())?;
        let transformer = ContentTransformer::new(config.format.max_length);

        Ok(Self::new(Arc::new(source), Arc::new(publisher), transformer))
    }

    /// Fetch today's problem, convert its statement and publish it.
    pub async fn process_daily_challenge(&self) -> Result<PublishReceipt> {
        info!(
            source = self.source.name(),
            publisher = self.publisher.name(),
            "processing daily challenge"
        );

        let challenge = self
            .source
            .fetch_daily()
            .await
            .context("failed to fetch daily problem")?;

        let rendered = self.transformer.render(&challenge.question.content);
        if rendered.truncated {
            warn!(
                original_len = rendered.original_length,
                max_len = self.transformer.max_length(),
                "problem statement truncated"
            );
        }

        let msg = ChallengeMessage::new(
            format_date(&challenge.date),
            challenge.question,
            rendered.text,
        );

        let receipt = self
            .publisher
            .publish(&msg)
            .await
            .context("failed to publish daily challenge")?;

        info!(
            title = %msg.question.title,
            difficulty = %msg.question.difficulty,
            "successfully processed daily challenge"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dailybot_core::types::{DailyChallenge, Difficulty, Question};
    use dailybot_core::BotError;
    use tokio::sync::Mutex;

    struct StaticSource {
        challenge: Option<DailyChallenge>,
    }

    #[async_trait]
    impl ProblemSource for StaticSource {
        async fn fetch_daily(&self) -> Result<DailyChallenge> {
            self.challenge
                .clone()
                .ok_or_else(|| anyhow::anyhow!("upstream down"))
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        sent: Mutex<Vec<ChallengeMessage>>,
        fail: bool,
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        fn name(&self) -> &str {
            "recording"
        }

        async fn publish(&self, msg: &ChallengeMessage) -> Result<PublishReceipt> {
            if self.fail {
                return Err(BotError::UnexpectedStatus {
                    status: 500,
                    body: "nope".into(),
                }
                .into());
            }
            self.sent.lock().await.push(msg.clone());
            Ok(PublishReceipt {
                message_id: Some("m-1".into()),
                channel_id: Some("c-1".into()),
            })
        }
    }

    fn challenge(content: &str) -> DailyChallenge {
        DailyChallenge {
            date: "2026-10-18".into(),
            link: None,
            question: Question {
                title: "Two Sum".into(),
                title_slug: "two-sum".into(),
                difficulty: Difficulty::Easy,
                url: "https://leetcode.com/problems/two-sum/".into(),
                content: content.into(),
            },
        }
    }

    #[tokio::test]
    async fn test_process_transforms_and_publishes() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = DailyBotService::new(
            Arc::new(StaticSource {
                challenge: Some(challenge("<p>Hello &amp; <code>world</code></p>")),
            }),
            publisher.clone(),
            ContentTransformer::default(),
        );

        let receipt = service.process_daily_challenge().await.unwrap();
        assert_eq!(receipt.message_id.as_deref(), Some("m-1"));

        let sent = publisher.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body, "Hello & `world`\n");
        assert_eq!(sent[0].date, "2026-10-18");
        assert_eq!(sent[0].question.title, "Two Sum");
    }

    #[tokio::test]
    async fn test_process_applies_budget() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = DailyBotService::new(
            Arc::new(StaticSource {
                challenge: Some(challenge(&"a".repeat(500))),
            }),
            publisher.clone(),
            ContentTransformer::new(100),
        );

        service.process_daily_challenge().await.unwrap();

        let sent = publisher.sent.lock().await;
        assert_eq!(sent[0].body.chars().count(), 100);
        assert!(sent[0].body.ends_with("..."));
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_publish() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = DailyBotService::new(
            Arc::new(StaticSource { challenge: None }),
            publisher.clone(),
            ContentTransformer::default(),
        );

        let err = service.process_daily_challenge().await.unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch daily problem");
        assert!(publisher.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_keeps_cause() {
        let service = DailyBotService::new(
            Arc::new(StaticSource {
                challenge: Some(challenge("<p>x</p>")),
            }),
            Arc::new(RecordingPublisher {
                fail: true,
                ..Default::default()
            }),
            ContentTransformer::default(),
        );

        let err = service.process_daily_challenge().await.unwrap_err();
        assert_eq!(err.to_string(), "failed to publish daily challenge");
        assert!(matches!(
            err.downcast_ref::<BotError>(),
            Some(BotError::UnexpectedStatus { status: 500, .. })
        ));
    }

    #[test]
    fn test_from_config_requires_webhook() {
        let err = DailyBotService::from_config(&Config::default()).err().unwrap();
        assert_eq!(
            err.downcast_ref::<BotError>(),
            Some(&BotError::MissingWebhookUrl)
        );
    }

    #[test]
    fn test_from_config_uses_budget() {
        let mut config = Config::default();
        config.discord.webhook_url = "https://discord.com/api/webhooks/1/abc".into();
        config.format.max_length = 1900;
        let service = DailyBotService::from_config(&config).unwrap();
        assert_eq!(service.transformer.max_length(), 1900);
    }
}
