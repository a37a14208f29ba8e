use async_trait::async_trait;
use std::time::Duration;

use crate::traits::Clock;

/// Wall clock backed by `tokio::time`, used for gas quote retry backoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_paused_time() {
        let clock = TokioClock;
        let start = tokio::time::Instant::now();

        clock.sleep(Duration::from_secs(30)).await;

        assert_eq!(start.elapsed(), Duration::from_secs(30));
    }
}
