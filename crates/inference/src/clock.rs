//! Production clock backed by the tokio timer.

use async_trait::async_trait;
use sitewright_core::clock::Clock;
use std::time::Duration;

/// Sleeps on `tokio::time`, yielding to the scheduler.
///
/// Under `tokio::time::pause()` the sleep auto-advances, so tests using this
/// clock stay deterministic without real waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
