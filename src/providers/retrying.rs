use alloy_primitives::U256;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

use crate::config::RetryConfig;
use crate::error::Result;
use crate::protocol::GasFeeRequest;
use crate::traits::{Clock, GasEstimator};

/// Retries a failing gas estimator with a fixed backoff.
///
/// With `max_attempts == 1` this is a transparent pass-through.
#[derive(Debug, Clone)]
pub struct RetryingGasEstimator<G, C> {
    inner: G,
    clock: C,
    config: RetryConfig,
}

impl<G: GasEstimator, C: Clock> RetryingGasEstimator<G, C> {
    pub fn new(inner: G, clock: C, config: RetryConfig) -> Self {
        Self {
            inner,
            clock,
            config,
        }
    }
}

#[async_trait]
impl<G: GasEstimator, C: Clock> GasEstimator for RetryingGasEstimator<G, C> {
    async fn estimate_gas_fee(&self, request: &GasFeeRequest) -> Result<U256> {
        let max_attempts = self.config.max_attempts.max(1);
        let backoff = Duration::from_secs(self.config.backoff_secs);
        let mut attempt = 1;

        loop {
            match self.inner.estimate_gas_fee(request).await {
                Ok(quote) => return Ok(quote),
                Err(e) if attempt < max_attempts => {
                    warn!(
                        attempt = attempt,
                        max_attempts = max_attempts,
                        error = %e,
                        backoff_secs = self.config.backoff_secs,
                        event = "gas_quote_retry"
                    );
                    self.clock.sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
