//! Clock trait: the single suspension point of the core.
//!
//! Simulated compute waits on a `Clock` instead of sleeping directly, so
//! tests can observe (or skip) the delay deterministically.

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Clock: Send + Sync {
    /// Yield to the scheduler for `duration`. Must not block the thread.
    async fn sleep(&self, duration: Duration);
}
