//! LeetCode HTML → Discord markdown converter.
//!
//! Problem statements arrive as a small, fixed vocabulary of HTML tags and
//! named entities. This module rewrites them into Discord's markdown dialect
//! and enforces an output budget.
//!
//! Supported conversions:
//! - Paragraphs (`<p>`) → text followed by a newline
//! - Preformatted blocks (`<pre>`) → fenced code (```)
//! - Inline code (`<code>`) → `` `...` ``
//! - List items (`<li>`) → `•` bullets
//! - Bold (`<strong>`) → `**...**`, example labels get a 👉 prefix
//! - Italic, subscript, example wrappers, monospace font → unwrapped
//! - Entities (`&lt; &gt; &amp; &quot; &#39;`) → literal characters
//! - `&nbsp;` → a fixed-width divider line
//! - Anything else that looks like a tag → stripped
//!
//! The conversion is an ordered list of pure stages (see [`STAGES`]). Later
//! stages assume earlier ones already ran, and whitespace cleanup is
//! reapplied after every stage that can produce new blank runs.

use std::sync::LazyLock;

use regex::Regex;

pub use dailybot_core::config::schema::DEFAULT_MAX_LENGTH;

/// Appended when the output is cut to fit the budget.
pub const TRUNCATION_MARKER: &str = "...";

/// What `&nbsp;` decodes to. LeetCode uses `<p>&nbsp;</p>` as a section
/// break, so it renders as a divider rather than a space.
pub const NBSP_DIVIDER: &str =
    "-----------------------------=================================----------------------------------";

// Placeholders for brackets decoded from `&lt;`/`&gt;` while tags are stripped.
const LT_GUARD: char = '\u{E000}';
const GT_GUARD: char = '\u{E001}';

// ─────────────────────────────────────────────
// Replacement tables
// ─────────────────────────────────────────────

type Rules = &'static [(&'static str, &'static str)];

const BLOCK_RULES: Rules = &[
    ("<p>", ""),
    ("</p>", "\n"),
    ("<pre>", "```\n"),
    ("</pre>", "\n```"),
];

const INLINE_CODE_RULES: Rules = &[("<code>", "`"), ("</code>", "`")];

const LIST_RULES: Rules = &[
    ("<ul>", ""),
    ("</ul>", ""),
    ("<li>", "• "),
    ("</li>", "\n"),
];

const EMPHASIS_RULES: Rules = &[
    ("<strong>", "**"),
    ("<strong class=\"example\">", "👉**"),
    ("</strong>", "**"),
    ("<em>", ""),
    ("</em>", ""),
    ("<sub>", ""),
    ("</sub>", ""),
    ("<span class=\"example-io\">", ""),
    ("</span>", ""),
    ("<div class=\"example-block\">", ""),
    ("</div>", ""),
];

// `&amp;` comes after `&lt;`/`&gt;` so `&amp;lt;` decodes once, to `&lt;`.
const ENTITY_RULES: Rules = &[
    ("&lt;", "\u{E000}"),
    ("&gt;", "\u{E001}"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&nbsp;", NBSP_DIVIDER),
    ("&#39;", "'"),
    ("<font face=\"monospace\">", ""),
    ("</font>", ""),
];

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern"));
static LEADING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+").expect("indent pattern"));
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\n").expect("blank line pattern"));

fn apply_rules(text: String, rules: Rules) -> String {
    rules
        .iter()
        .fold(text, |text, &(from, to)| text.replace(from, to))
}

// ─────────────────────────────────────────────
// Stages
// ─────────────────────────────────────────────

/// A single rewrite step.
pub(crate) type Stage = fn(String) -> String;

/// The rewrite pipeline, in execution order.
pub(crate) const STAGES: &[(&str, Stage)] = &[
    ("blocks", rewrite_blocks),
    ("inline_code", rewrite_inline_code),
    ("lists", rewrite_lists),
    ("emphasis", rewrite_emphasis),
    ("entities", decode_entities),
    ("triple_newlines", collapse_triple_newlines),
    ("tags", strip_tags),
    ("newline_runs", collapse_newline_runs),
    ("leading_whitespace", trim_leading_whitespace),
    ("blank_lines", squash_blank_lines),
    ("newline_runs", collapse_newline_runs),
];

pub(crate) fn rewrite_blocks(text: String) -> String {
    apply_rules(text, BLOCK_RULES)
}

pub(crate) fn rewrite_inline_code(text: String) -> String {
    apply_rules(text, INLINE_CODE_RULES)
}

pub(crate) fn rewrite_lists(text: String) -> String {
    apply_rules(text, LIST_RULES)
}

pub(crate) fn rewrite_emphasis(text: String) -> String {
    apply_rules(text, EMPHASIS_RULES)
}

/// Decode the named entities. Decoded angle brackets are held as
/// placeholders until [`strip_tags`] has run.
pub(crate) fn decode_entities(text: String) -> String {
    let guards: &[char] = &[LT_GUARD, GT_GUARD];
    let text = if text.contains(guards) {
        text.replace(guards, "")
    } else {
        text
    };
    apply_rules(text, ENTITY_RULES)
}

/// Literal `\n\n\n` → `\n\n`, non-overlapping.
pub(crate) fn collapse_triple_newlines(text: String) -> String {
    text.replace("\n\n\n", "\n\n")
}

/// Drop every remaining `<...>` and put back the decoded brackets.
pub(crate) fn strip_tags(text: String) -> String {
    let text = TAG.replace_all(&text, "");
    text.chars()
        .map(|c| match c {
            LT_GUARD => '<',
            GT_GUARD => '>',
            c => c,
        })
        .collect()
}

/// Any run of 3+ newlines → exactly two.
pub(crate) fn collapse_newline_runs(text: String) -> String {
    NEWLINE_RUN.replace_all(&text, "\n\n").into_owned()
}

pub(crate) fn trim_leading_whitespace(text: String) -> String {
    LEADING_WHITESPACE.replace_all(&text, "").into_owned()
}

/// Whitespace-only lines become empty lines.
pub(crate) fn squash_blank_lines(text: String) -> String {
    BLANK_LINE.replace_all(&text, "\n").into_owned()
}

// ─────────────────────────────────────────────
// ContentTransformer
// ─────────────────────────────────────────────

/// Result of a conversion, with the truncation signal kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Whether the budget forced a cut.
    pub truncated: bool,
    /// Length in chars before the budget was applied.
    pub original_length: usize,
}

/// Converts problem HTML into Discord-safe markdown within a length budget.
///
/// Pure and deterministic; safe to share across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentTransformer {
    max_length: usize,
}

impl Default for ContentTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl ContentTransformer {
    /// Create a transformer with the given budget, in characters.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Convert `input`, silently truncating when over budget.
    pub fn transform(&self, input: &str) -> String {
        self.render(input).text
    }

    /// Convert `input` and report whether the budget cut it.
    pub fn render(&self, input: &str) -> Rendered {
        if input.is_empty() {
            return Rendered {
                text: String::new(),
                truncated: false,
                original_length: 0,
            };
        }

        let text = STAGES
            .iter()
            .fold(input.to_string(), |text, (_, stage)| stage(text));

        enforce_budget(text, self.max_length)
    }
}

/// Hard cut to `max_length` chars, ending in [`TRUNCATION_MARKER`] when cut.
///
/// Budgets shorter than the marker are cut without it.
fn enforce_budget(text: String, max_length: usize) -> Rendered {
    let original_length = text.chars().count();
    if original_length <= max_length {
        return Rendered {
            text,
            truncated: false,
            original_length,
        };
    }

    let marker_len = TRUNCATION_MARKER.chars().count();
    let text = if max_length < marker_len {
        text.chars().take(max_length).collect()
    } else {
        let mut cut: String = text.chars().take(max_length - marker_len).collect();
        cut.push_str(TRUNCATION_MARKER);
        cut
    };

    Rendered {
        text,
        truncated: true,
        original_length,
    }
}

/// Convert with the default 4000-char budget.
pub fn html_to_discord_markdown(input: &str) -> String {
    ContentTransformer::default().transform(input)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
