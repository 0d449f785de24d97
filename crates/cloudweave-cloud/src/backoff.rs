//! Backoff and retry settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Polling backoff used by the state-change engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Delay after the first non-terminal observation (milliseconds)
    pub initial_delay_ms: u64,
    /// Upper bound for a single delay (milliseconds)
    pub max_delay_ms: u64,
    /// Exponential multiplier
    pub multiplier: f64,
    /// Consecutive "gone" observations tolerated while waiting for a target
    pub not_found_checks: u32,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 100,
            max_delay_ms: 10_000,
            multiplier: 2.0,
            not_found_checks: 20,
        }
    }
}

impl BackoffConfig {
    /// Delay before the next poll after `attempt` observations (milliseconds)
    pub fn delay_for_attempt(&self, attempt: u32) -> u64 {
        exponential_delay(self.initial_delay_ms, self.multiplier, self.max_delay_ms, attempt)
    }
}

/// Retry settings for provider calls that fail with known transient codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first call)
    pub max_attempts: u32,
    /// Initial delay between retries (milliseconds)
    pub initial_delay_ms: u64,
    /// Maximum delay between retries (milliseconds)
    pub max_delay_ms: u64,
    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1_000,
            max_delay_ms: 30_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        Duration::from_millis(exponential_delay(
            self.initial_delay_ms,
            self.backoff_multiplier,
            self.max_delay_ms,
            attempt,
        ))
    }
}

fn exponential_delay(initial_ms: u64, multiplier: f64, max_ms: u64, attempt: u32) -> u64 {
    let delay = initial_ms as f64 * multiplier.powi(attempt.min(i32::MAX as u32) as i32);
    if delay.is_finite() {
        (delay as u64).min(max_ms)
    } else {
        max_ms
    }
}
