//! Publisher trait — the abstract interface every delivery target implements.
//!
//! A publisher receives a finished [`ChallengeMessage`] and delivers it to
//! its destination (a Discord webhook today), reporting where it landed.

use async_trait::async_trait;
use dailybot_core::types::Question;

/// A daily challenge ready to be delivered.
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeMessage {
    /// Challenge date, already normalized to `YYYY-MM-DD` when possible.
    pub date: String,
    pub question: Question,
    /// Problem statement after conversion to chat markdown.
    pub body: String,
}

impl ChallengeMessage {
    pub fn new(date: impl Into<String>, question: Question, body: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            question,
            body: body.into(),
        }
    }
}

/// Where a message ended up. Fields are empty when the destination
/// doesn't report them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
    pub channel_id: Option<String>,
}

/// Every delivery target implements this trait.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publisher name for logging (e.g. "discord").
    fn name(&self) -> &str;

    /// Deliver the message.
    async fn publish(&self, msg: &ChallengeMessage) -> anyhow::Result<PublishReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailybot_core::types::Difficulty;
    use std::sync::Arc;

    /// A publisher that records what it was given.
    struct MockPublisher {
        sent: Arc<tokio::sync::Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Publisher for MockPublisher {
        fn name(&self) -> &str {
            "mock"
        }

        async fn publish(&self, msg: &ChallengeMessage) -> anyhow::Result<PublishReceipt> {
            self.sent.lock().await.push(msg.body.clone());
            Ok(PublishReceipt {
                message_id: Some("1".into()),
                channel_id: None,
            })
        }
    }

    fn question() -> Question {
        Question {
            title: "Two Sum".into(),
            title_slug: "two-sum".into(),
            difficulty: Difficulty::Easy,
            url: "https://leetcode.com/problems/two-sum/".into(),
            content: "<p>x</p>".into(),
        }
    }

    #[test]
    fn test_message_new() {
        let msg = ChallengeMessage::new("2026-10-18", question(), "x\n");
        assert_eq!(msg.date, "2026-10-18");
        assert_eq!(msg.body, "x\n");
        assert_eq!(msg.question.title, "Two Sum");
    }

    #[tokio::test]
    async fn test_publish_through_trait_object() {
        let sent = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let publisher: Box<dyn Publisher> = Box::new(MockPublisher { sent: sent.clone() });

        let receipt = publisher
            .publish(&ChallengeMessage::new("2026-10-18", question(), "body"))
            .await
            .unwrap();

        assert_eq!(publisher.name(), "mock");
        assert_eq!(receipt.message_id.as_deref(), Some("1"));
        assert_eq!(*sent.lock().await, vec!["body".to_string()]);
    }
}
