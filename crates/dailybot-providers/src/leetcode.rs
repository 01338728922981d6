//! LeetCode GraphQL client for the daily coding challenge.
//!
//! Sends the `questionOfToday` query to `{api_base}/graphql` and derives
//! the problem URL from the title slug.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use dailybot_core::error::BotError;
use dailybot_core::types::{DailyChallenge, Question};

use crate::traits::ProblemSource;

/// Default site base.
pub const DEFAULT_API_BASE: &str = "https://leetcode.com";

const HTTP_TIMEOUT_SECS: u64 = 30;

const DAILY_QUERY: &str = "query questionOfToday {
    activeDailyCodingChallengeQuestion {
        date
        link
        question {
            title
            titleSlug
            difficulty
            content
        }
    }
}";

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<DailyData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyData {
    active_daily_coding_challenge_question: Option<DailyChallenge>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

// ─────────────────────────────────────────────
// LeetCodeClient
// ─────────────────────────────────────────────

/// Fetches the daily challenge from LeetCode.
#[derive(Debug)]
pub struct LeetCodeClient {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// Site base URL, without trailing slash.
    api_base: String,
}

impl Default for LeetCodeClient {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_API_BASE)
    }
}

impl LeetCodeClient {
    /// Create a client for the given site base (e.g. `https://leetcode.com`).
    pub fn new(api_base: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(client, api_base))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_base)
    }

    /// Decode a GraphQL body into the challenge, surfacing GraphQL errors.
    fn parse_response(&self, body: &str) -> anyhow::Result<DailyChallenge> {
        let resp: GraphQlResponse =
            serde_json::from_str(body).context("failed to parse leetcode response")?;

        if !resp.errors.is_empty() {
            let messages: Vec<&str> = resp.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(anyhow!("leetcode graphql error: {}", messages.join("; ")));
        }

        resp.data
            .and_then(|d| d.active_daily_coding_challenge_question)
            .ok_or_else(|| anyhow!("leetcode response has no daily challenge"))
    }

    /// Fill in fields that aren't part of the upstream payload.
    fn enhance(&self, challenge: &mut DailyChallenge) {
        let q = &mut challenge.question;
        q.url = Question::problem_url(&self.api_base, &q.title_slug);
    }
}

#[async_trait]
impl ProblemSource for LeetCodeClient {
    async fn fetch_daily(&self) -> anyhow::Result<DailyChallenge> {
        let url = self.graphql_url();
        debug!(url = %url, "fetching daily challenge");

        let response = self
            .client
            .post(&url)
            .header("Referer", &self.api_base)
            .json(&serde_json::json!({ "query": DAILY_QUERY }))
            .send()
            .await
            .context("leetcode request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read leetcode response")?;

        if !status.is_success() {
            error!(status = %status, body = %body, "leetcode API error");
            return Err(BotError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let mut challenge = self.parse_response(&body)?;
        self.enhance(&mut challenge);

        debug!(
            date = %challenge.date,
            title = %challenge.question.title,
            difficulty = %challenge.question.difficulty,
            content_len = challenge.question.content.len(),
            "daily challenge received"
        );
        Ok(challenge)
    }

    fn name(&self) -> &str {
        "leetcode"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
