//! Problem sources for Dailybot.
//!
//! # Architecture
//!
//! - [`traits::ProblemSource`] — trait that all sources implement
//! - [`leetcode::LeetCodeClient`] — LeetCode GraphQL client for the daily challenge

pub mod leetcode;
pub mod traits;

pub use leetcode::LeetCodeClient;
pub use traits::ProblemSource;
