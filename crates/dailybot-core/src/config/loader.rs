//! Config loader — reads `~/.dailybot/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.dailybot/config.json` (or an explicit path)
//! 3. Legacy env vars `DISCORD_WEBHOOK_URL`, `DISCORD_BOT_TOKEN`
//! 4. Environment variables `DAILYBOT_<SECTION>__<FIELD>`

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;
use crate::utils::expand_tilde;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Path the config is read from: the explicit one with `~` expanded, or the default.
pub fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    path.map(expand_tilde).unwrap_or_else(get_config_path)
}

/// Load configuration from the given path (or the default one) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config = read_config_file(&resolve_config_path(path));
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Read and parse a config file, without env overrides.
fn read_config_file(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Apply environment overrides on top of a loaded config.
///
/// `lookup` resolves a variable name; the loader passes `std::env::var`.
///
/// Supported overrides:
/// - `DISCORD_WEBHOOK_URL`, `DAILYBOT_DISCORD__WEBHOOK_URL` → `discord.webhook_url`
/// - `DISCORD_BOT_TOKEN`, `DAILYBOT_DISCORD__BOT_TOKEN` → `discord.bot_token`
/// - `DAILYBOT_DISCORD__API_BASE` → `discord.api_base`
/// - `DAILYBOT_DISCORD__MENTION` → `discord.mention`
/// - `DAILYBOT_DISCORD__USE_EMBED` → `discord.use_embed`
/// - `DAILYBOT_DISCORD__CREATE_THREAD` → `discord.create_thread`
/// - `DAILYBOT_LEETCODE__API_BASE` → `leetcode.api_base`
/// - `DAILYBOT_FORMAT__MAX_LENGTH` → `format.max_length`
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // Legacy names first so the namespaced ones win.
    if let Some(val) = lookup("DISCORD_WEBHOOK_URL") {
        config.discord.webhook_url = val;
    }
    if let Some(val) = lookup("DISCORD_BOT_TOKEN") {
        config.discord.bot_token = val;
    }

    if let Some(val) = lookup("DAILYBOT_DISCORD__WEBHOOK_URL") {
        config.discord.webhook_url = val;
    }
    if let Some(val) = lookup("DAILYBOT_DISCORD__BOT_TOKEN") {
        config.discord.bot_token = val;
    }
    if let Some(val) = lookup("DAILYBOT_DISCORD__API_BASE") {
        config.discord.api_base = val;
    }
    if let Some(val) = lookup("DAILYBOT_DISCORD__MENTION") {
        config.discord.mention = val;
    }
    if let Some(val) = lookup("DAILYBOT_DISCORD__USE_EMBED") {
        config.discord.use_embed = parse_bool(&val);
    }
    if let Some(val) = lookup("DAILYBOT_DISCORD__CREATE_THREAD") {
        config.discord.create_thread = parse_bool(&val);
    }

    if let Some(val) = lookup("DAILYBOT_LEETCODE__API_BASE") {
        config.leetcode.api_base = val;
    }

    if let Some(val) = lookup("DAILYBOT_FORMAT__MAX_LENGTH") {
        match val.parse::<usize>() {
            Ok(n) => config.format.max_length = n,
            Err(e) => warn!(value = %val, error = %e, "ignoring invalid DAILYBOT_FORMAT__MAX_LENGTH"),
        }
    }

    config
}

fn parse_bool(val: &str) -> bool {
    val == "true" || val == "1"
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
