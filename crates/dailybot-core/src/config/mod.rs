//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use dailybot_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Budget: {}", cfg.format.max_length);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{get_config_path, load_config, resolve_config_path};
pub use schema::{Config, DiscordConfig, FormatConfig, LeetCodeConfig};
