//! Retry provider calls that fail with known transient error codes

use crate::backoff::RetryConfig;
use crate::error::Result;
use std::future::Future;
use tracing::warn;

/// Call `f` until it succeeds, fails with a code outside `codes`, or the
/// attempts in `config` are exhausted.
///
/// Used for eventual-consistency windows, e.g. a bucket that was just
/// created answering `NoSuchBucket`.
pub async fn retry_on_codes<F, Fut, T>(config: &RetryConfig, codes: &[&str], mut f: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(err) => {
                attempt += 1;

                if !err.is_code(codes) {
                    return Err(err);
                }

                if attempt >= config.max_attempts {
                    warn!(
                        error = %err,
                        attempt = attempt,
                        max_attempts = config.max_attempts,
                        "max retry attempts exhausted"
                    );
                    return Err(err);
                }

                let delay = config.delay_for_attempt(attempt - 1);
                warn!(
                    error = %err,
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "retrying after error"
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}
