//! `dailybot status` — show configuration status.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use dailybot_core::config::{load_config, resolve_config_path};

/// Run the status command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path);
    let path = resolve_config_path(config_path);

    println!();
    println!("{}", "📌 Dailybot Status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        path.display(),
        if path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    println!("  {:<18} {}", "LeetCode:".bold(), config.leetcode.api_base);

    let webhook = if config.discord.webhook_url.is_empty() {
        "✗ not set".red().to_string()
    } else {
        format!("{} {}", "✓".green(), mask_secret(&config.discord.webhook_url))
    };
    println!("  {:<18} {}", "Webhook:".bold(), webhook);

    let token = if config.discord.has_bot_token() {
        format!("{} (token set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("  {:<18} {}", "Bot token:".bold(), token);

    println!(
        "  {:<18} {} | thread: {}",
        "Delivery:".bold(),
        if config.discord.use_embed { "embed" } else { "content" },
        if config.discord.create_thread { "on" } else { "off" },
    );

    println!(
        "  {:<18} {} chars",
        "Max length:".bold(),
        config.format.max_length
    );

    let mut problems: Vec<String> = config
        .validate()
        .err()
        .map(|e| e.to_string())
        .into_iter()
        .collect();
    problems.extend(config.warnings());
    if !problems.is_empty() {
        println!();
        for problem in &problems {
            println!("  {} {}", "⚠".yellow(), problem);
        }
    }

    println!();
    Ok(())
}

/// Keep the start of a secret-bearing URL, hide the rest.
fn mask_secret(value: &str) -> String {
    const VISIBLE: usize = 32;
    if value.chars().count() <= VISIBLE {
        return value.to_string();
    }
    let head: String = value.chars().take(VISIBLE).collect();
    format!("{head}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret_short() {
        assert_eq!(mask_secret("https://x/hook"), "https://x/hook");
    }

    #[test]
    fn test_mask_secret_long() {
        let masked = mask_secret("https://discord.com/api/webhooks/123456/very-secret-token");
        assert_eq!(masked, "https://discord.com/api/webhooks…");
        assert!(!masked.contains("secret"));
    }
}
