//! Retry logic with exponential backoff.

use crate::context::RequestContext;
use crate::errors::{NluError, NluResult};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first one
    pub max_retries: u32,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
    /// Jitter factor (0.0 to 1.0) to randomize delays
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that performs exactly one attempt.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial delay
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the jitter factor
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Calculate the delay before retry number `attempt` (1-based)
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let base_delay = self.initial_delay.as_millis() as f64
            * self.multiplier.powi(attempt.saturating_sub(1) as i32);

        let delay_ms = base_delay.min(self.max_delay.as_millis() as f64);

        let jitter_range = delay_ms * self.jitter;
        let jitter_offset = rand::random::<f64>() * jitter_range * 2.0 - jitter_range;
        let final_delay_ms = (delay_ms + jitter_offset).max(0.0);

        Duration::from_millis(final_delay_ms as u64)
    }
}

/// Runs `future` unless the context is cancelled or its deadline passes first.
pub(crate) async fn with_context<T, Fut>(ctx: &RequestContext, future: Fut) -> NluResult<T>
where
    Fut: Future<Output = NluResult<T>>,
{
    if ctx.is_cancelled() {
        return Err(NluError::Cancelled);
    }
    if ctx.is_expired() {
        return Err(deadline_exceeded());
    }

    let deadline = async {
        match ctx.deadline() {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = ctx.token().cancelled() => Err(NluError::Cancelled),
        _ = deadline => Err(deadline_exceeded()),
        result = future => result,
    }
}

fn deadline_exceeded() -> NluError {
    NluError::DeadlineExceeded {
        message: "context deadline exceeded".to_string(),
    }
}

/// Executor for retry operations
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Create a new retry executor with custom configuration
    pub fn with_config(config: RetryConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute an operation with retry logic.
    ///
    /// Every attempt and every backoff sleep is raced against `ctx`; a
    /// cancelled or expired context ends the loop immediately.
    pub async fn execute<F, Fut, T>(&self, ctx: &RequestContext, operation: F) -> NluResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = NluResult<T>>,
    {
        let max_attempts = self.config.max_retries + 1;
        let mut attempt = 1;

        loop {
            let error = match with_context(ctx, operation()).await {
                Ok(result) => return Ok(result),
                Err(error) => error,
            };

            if !error.is_retryable() || attempt >= max_attempts {
                return Err(error);
            }

            let delay = error
                .retry_after()
                .unwrap_or_else(|| self.config.calculate_delay(attempt));

            warn!(
                attempt,
                max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Retrying request"
            );

            with_context(ctx, async {
                tokio::time::sleep(delay).await;
                Ok(())
            })
            .await?;

            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportResponse;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    fn fast_config(max_retries: u32) -> RetryConfig {
        RetryConfig::new()
            .with_max_retries(max_retries)
            .with_initial_delay(Duration::from_millis(1))
            .with_jitter(0.0)
    }

    #[test]
    fn test_retry_config_default() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 4);
        assert_eq!(config.initial_delay, Duration::from_secs(1));
        assert_eq!(config.max_delay, Duration::from_secs(30));
        assert_eq!(RetryConfig::disabled().max_retries, 0);
    }

    #[test]
    fn test_calculate_delay_respects_max() {
        let config = RetryConfig::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(5))
            .with_multiplier(10.0)
            .with_jitter(0.0);

        assert_eq!(config.calculate_delay(1), Duration::from_secs(1));
        assert_eq!(config.calculate_delay(10), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_attempt_timeouts_retried_until_success() {
        let executor = RetryExecutor::with_config(fast_config(3));
        let counter = Arc::new(AtomicU32::new(0));

        let result = executor
            .execute(&RequestContext::background(), || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(NluError::Timeout {
                            message: "operation timed out".to_string(),
                        })
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_error_fails_fast() {
        let executor = RetryExecutor::with_config(fast_config(3));
        let counter = Arc::new(AtomicU32::new(0));

        let result = executor
            .execute(&RequestContext::background(), || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(NluError::Authentication {
                        status: 401,
                        message: "Invalid key".to_string(),
                        response: Box::new(TransportResponse {
                            status: 401,
                            headers: http::HeaderMap::new(),
                            body: bytes::Bytes::new(),
                        }),
                    })
                }
            })
            .await;

        assert!(matches!(result, Err(NluError::Authentication { .. })));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhausted_retries_return_last_error() {
        let executor = RetryExecutor::with_config(fast_config(2));
        let counter = Arc::new(AtomicU32::new(0));

        let result = executor
            .execute(&RequestContext::background(), || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(NluError::Network {
                        message: "connection reset".to_string(),
                    })
                }
            })
            .await;

        assert!(matches!(result, Err(NluError::Network { .. })));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_deadline_interrupts_attempt() {
        let executor = RetryExecutor::default();
        let ctx = RequestContext::with_timeout(Duration::from_millis(10));

        let result = executor
            .execute(&ctx, || async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(NluError::DeadlineExceeded { .. })));
    }

    #[tokio::test]
    async fn test_cancellation_interrupts_backoff() {
        let executor = RetryExecutor::with_config(
            RetryConfig::new()
                .with_max_retries(5)
                .with_initial_delay(Duration::from_secs(10)),
        );
        let token = CancellationToken::new();
        let ctx = RequestContext::with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });

        let result = executor
            .execute(&ctx, || async {
                Err::<(), _>(NluError::Network {
                    message: "down".to_string(),
                })
            })
            .await;

        canceller.await.unwrap();
        assert!(matches!(result, Err(NluError::Cancelled)));
    }

    #[test]
    fn test_cancel_wakes_pending_call() {
        let token = CancellationToken::new();
        let ctx = RequestContext::with_cancellation(token.clone());
        let mut call = tokio_test::task::spawn(with_context(
            &ctx,
            std::future::pending::<NluResult<()>>(),
        ));

        tokio_test::assert_pending!(call.poll());
        token.cancel();
        assert!(call.is_woken());
        let result = tokio_test::assert_ready!(call.poll());
        assert!(matches!(result, Err(NluError::Cancelled)));
    }
}
