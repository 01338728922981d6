//! ProblemSource trait — where today's problem comes from.

use async_trait::async_trait;
use dailybot_core::types::DailyChallenge;

/// Trait that all problem sources implement.
///
/// The main implementation is `LeetCodeClient`.
#[async_trait]
pub trait ProblemSource: Send + Sync {
    /// Fetch today's challenge.
    ///
    /// The returned question has its `url` filled in.
    async fn fetch_daily(&self) -> anyhow::Result<DailyChallenge>;

    /// Display name for logging.
    fn name(&self) -> &str;
}
