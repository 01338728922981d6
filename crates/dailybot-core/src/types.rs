//! Core types — the daily challenge as served by the LeetCode GraphQL API.
//!
//! JSON keys are camelCase upstream; Rust uses snake_case.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Difficulty
// ─────────────────────────────────────────────

/// Problem difficulty label.
///
/// The set is closed upstream (`Easy`, `Medium`, `Hard`) but anything else
/// is kept verbatim in `Other` and decorated with the fallback glyph/color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    /// Parse a label. Matching is exact, like the upstream values.
    pub fn parse(label: &str) -> Self {
        match label {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            other => Difficulty::Other(other.to_string()),
        }
    }

    /// The label as shown to users.
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other(label) => label,
        }
    }

    /// Glyph shown in front of the problem title.
    pub fn emoji(&self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟠",
            Difficulty::Hard => "🔴",
            Difficulty::Other(_) => "🧮",
        }
    }

    /// Embed side-bar color, as a decimal RGB value.
    pub fn color(&self) -> u32 {
        match self {
            Difficulty::Easy => 5_025_616,    // green
            Difficulty::Medium => 16_750_848, // orange
            Difficulty::Hard => 16_007_990,   // red
            Difficulty::Other(_) => 5_793_266,
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Difficulty::parse(&label)
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.as_str().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Question / DailyChallenge
// ─────────────────────────────────────────────

/// A single problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub title_slug: String,
    pub difficulty: Difficulty,
    /// Problem page URL. Not part of the upstream payload; filled in by the client.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Raw HTML problem statement.
    #[serde(default)]
    pub content: String,
}

impl Question {
    /// Build the canonical problem URL from a site base and the title slug.
    pub fn problem_url(base: &str, title_slug: &str) -> String {
        format!("{}/problems/{}/", base.trim_end_matches('/'), title_slug)
    }
}

/// The `activeDailyCodingChallengeQuestion` object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    /// Challenge date, normally `YYYY-MM-DD`.
    pub date: String,
    /// Site-relative link, e.g. `/problems/two-sum/`.
    #[serde(default)]
    pub link: Option<String>,
    pub question: Question,
}
