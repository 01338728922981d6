//! Configuration schema.
//!
//! Hierarchy: `Config` → `LeetCodeConfig`, `DiscordConfig`, `FormatConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

use crate::error::BotError;

/// Default output budget for a rendered problem statement, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 4000;

/// Discord's cap on a message's `content` field, in characters.
pub const DISCORD_CONTENT_LIMIT: usize = 2000;

/// Room left for mention, header, title and link around the body in content mode.
const CONTENT_TEMPLATE_ALLOWANCE: usize = 200;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.dailybot/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub leetcode: LeetCodeConfig,
    pub discord: DiscordConfig,
    pub format: FormatConfig,
}

impl Config {
    /// Check that a run can be attempted with this config.
    pub fn validate(&self) -> Result<(), BotError> {
        self.discord.validate()
    }

    /// Settings that are accepted but likely to fail at publish time.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let body_budget = DISCORD_CONTENT_LIMIT - CONTENT_TEMPLATE_ALLOWANCE;
        if !self.discord.use_embed && self.format.max_length > body_budget {
            warnings.push(format!(
                "format.maxLength {} may exceed Discord's {DISCORD_CONTENT_LIMIT}-char content limit; \
                 enable discord.useEmbed or lower it to {body_budget}",
                self.format.max_length
            ));
        }
        warnings
    }
}

// ─────────────────────────────────────────────
// LeetCode
// ─────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeetCodeConfig {
    /// Site base; the GraphQL endpoint is `{api_base}/graphql`.
    pub api_base: String,
}

impl Default for LeetCodeConfig {
    fn default() -> Self {
        Self {
            api_base: "https://leetcode.com".to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Discord
// ─────────────────────────────────────────────

/// Discord webhook settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscordConfig {
    /// Incoming webhook URL. Required.
    pub webhook_url: String,
    /// Bot token, only needed for thread creation.
    #[serde(default)]
    pub bot_token: String,
    /// REST API base used for thread creation.
    pub api_base: String,
    /// Prefix of the message, e.g. `@everyone`. Empty disables it.
    pub mention: String,
    pub greeting: String,
    /// Post the problem as an embed (colored by difficulty) instead of plain content.
    pub use_embed: bool,
    /// Open a discussion thread on the posted message.
    pub create_thread: bool,
    pub thread_auto_archive_minutes: u32,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            bot_token: String::new(),
            api_base: "https://discord.com/api/v10".to_string(),
            mention: "@everyone".to_string(),
            greeting: "🎅Hey noob:".to_string(),
            use_embed: false,
            create_thread: false,
            thread_auto_archive_minutes: 1440,
        }
    }
}

impl DiscordConfig {
    /// Whether a bot token is configured.
    pub fn has_bot_token(&self) -> bool {
        !self.bot_token.is_empty()
    }

    pub fn validate(&self) -> Result<(), BotError> {
        let url = self.webhook_url.trim();
        if url.is_empty() {
            return Err(BotError::MissingWebhookUrl);
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(BotError::InvalidWebhookUrl(url.to_string()));
        }
        if self.create_thread && !self.has_bot_token() {
            return Err(BotError::MissingBotToken);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Format
// ─────────────────────────────────────────────

/// Content transformer settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatConfig {
    /// Maximum rendered length in characters, truncation marker included.
    pub max_length: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.leetcode.api_base, "https://leetcode.com");
        assert_eq!(config.discord.api_base, "https://discord.com/api/v10");
        assert_eq!(config.discord.mention, "@everyone");
        assert_eq!(config.discord.thread_auto_archive_minutes, 1440);
        assert_eq!(config.format.max_length, 4000);
        assert!(!config.discord.use_embed);
    }

    #[test]
    fn test_validate_missing_webhook() {
        let config = Config::default();
        assert_eq!(config.validate(), Err(BotError::MissingWebhookUrl));
    }

    #[test]
    fn test_validate_invalid_webhook() {
        let mut config = Config::default();
        config.discord.webhook_url = "discord.com/api/webhooks/1/abc".into();
        assert!(matches!(
            config.validate(),
            Err(BotError::InvalidWebhookUrl(_))
        ));
    }

    #[test]
    fn test_validate_thread_needs_token() {
        let mut config = Config::default();
        config.discord.webhook_url = "https://discord.com/api/webhooks/1/abc".into();
        config.discord.create_thread = true;
        assert_eq!(config.validate(), Err(BotError::MissingBotToken));

        config.discord.bot_token = "token".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warns_when_content_mode_exceeds_discord_limit() {
        let mut config = Config::default();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("2000-char content limit"));

        config.format.max_length = 1800;
        assert!(config.warnings().is_empty());

        config.format.max_length = 4000;
        config.discord.use_embed = true;
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_camel_case_keys() {
        let raw = serde_json::to_value(Config::default()).unwrap();
        assert!(raw["discord"].get("webhookUrl").is_some());
        assert!(raw["discord"].get("threadAutoArchiveMinutes").is_some());
        assert!(raw["format"].get("maxLength").is_some());
    }
}
