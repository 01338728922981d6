//! Utility helpers — data paths, date normalization, timestamps.

use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;

/// Get the Dailybot data directory (e.g. `~/.dailybot/`).
pub fn get_data_path() -> PathBuf {
    home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".dailybot")
}

/// Normalize a challenge date to `YYYY-MM-DD`.
///
/// Only exact, zero-padded calendar dates are accepted; anything else
/// (including `2026-1-5`) is returned untouched.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => {
            let formatted = d.format("%Y-%m-%d").to_string();
            if formatted == date {
                formatted
            } else {
                date.to_string()
            }
        }
        Err(_) => date.to_string(),
    }
}

/// Get current ISO 8601 timestamp.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Replace a leading `~` component with the home directory.
///
/// `~user` forms are not expanded. Without a home directory the path is
/// returned as given.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match (components.next(), home_dir()) {
        (Some(Component::Normal(first)), Some(home)) if first == "~" => {
            home.join(components.as_path())
        }
        _ => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}
