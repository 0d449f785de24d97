//! Poll-until-state engine
//!
//! A [`StateChange`] repeatedly probes a resource through a [`StatusAdapter`]
//! until its state leaves the pending set, backing off exponentially between
//! polls. Every resource-specific waiter is an adapter plus a pending/target
//! state set; the loop itself lives here only once.

use crate::backoff::BackoffConfig;
use crate::error::{CloudError, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Longest wait a deadline is computed for; larger budgets are clamped
const MAX_WAIT: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Resource-specific status probe
#[async_trait]
pub trait StatusAdapter: Send + Sync {
    /// Lookup request sent on every poll
    type Request: Send + Sync;
    /// Provider payload describing the resource
    type Output: Send;

    fn build_request(&self) -> Self::Request;

    /// Query the provider. `Ok(None)` means the resource is gone.
    async fn query(&self, request: &Self::Request) -> Result<Option<Self::Output>>;

    fn extract_state(&self, output: &Self::Output) -> String;

    /// Errors for which polling continues until the deadline
    fn is_transient_error(&self, err: &CloudError) -> bool {
        err.is_transient()
    }

    /// Extra detail attached when the resource lands in an unexpected state
    fn failure_reason(&self, _output: &Self::Output) -> Option<String> {
        None
    }
}

/// Classification of one observed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Pending,
    Target,
    Failure,
}

/// Errors returned by [`StateChange::wait_for_state`]
///
/// Variants carry the last observed payload so callers can inspect it.
#[derive(Error, Debug)]
pub enum WaitError<T> {
    #[error("unexpected state '{state}', wanted target '{}'", .expected.join(", "))]
    UnexpectedState {
        state: String,
        expected: Vec<String>,
        reason: Option<String>,
        payload: T,
    },

    #[error(
        "timeout while waiting for state to become '{}' (last state: '{}', timeout: {timeout:?})",
        .expected.join(", "),
        .last_state.as_deref().unwrap_or("")
    )]
    Timeout {
        expected: Vec<String>,
        last_state: Option<String>,
        timeout: Duration,
        last_error: Option<String>,
        payload: Option<T>,
    },

    #[error("couldn't find resource ({checks} retries)")]
    NotFound { checks: u32 },

    #[error("wait cancelled (last state: '{}')", .last_state.as_deref().unwrap_or(""))]
    Cancelled {
        last_state: Option<String>,
        payload: Option<T>,
    },

    #[error("probe failed: {0}")]
    Probe(#[source] CloudError),
}

impl<T> WaitError<T> {
    /// Last payload observed before the wait ended
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::UnexpectedState { payload, .. } => Some(payload),
            Self::Timeout { payload, .. } | Self::Cancelled { payload, .. } => payload.as_ref(),
            Self::NotFound { .. } | Self::Probe(_) => None,
        }
    }

    pub fn last_state(&self) -> Option<&str> {
        match self {
            Self::UnexpectedState { state, .. } => Some(state),
            Self::Timeout { last_state, .. } | Self::Cancelled { last_state, .. } => {
                last_state.as_deref()
            }
            Self::NotFound { .. } | Self::Probe(_) => None,
        }
    }
}

impl<T> From<WaitError<T>> for CloudError {
    fn from(err: WaitError<T>) -> Self {
        match err {
            WaitError::UnexpectedState {
                state,
                expected,
                reason,
                ..
            } => CloudError::UnexpectedState {
                state,
                expected,
                reason,
            },
            WaitError::Timeout {
                expected,
                last_state,
                timeout,
                last_error,
                ..
            } => CloudError::Timeout {
                expected,
                last_state,
                timeout,
                last_error,
            },
            WaitError::NotFound { checks } => {
                CloudError::ResourceNotFound(format!("couldn't find resource ({checks} retries)"))
            }
            WaitError::Cancelled { last_state, .. } => CloudError::Cancelled { last_state },
            WaitError::Probe(err) => err,
        }
    }
}

/// Wait configuration: pending and target state sets plus a time budget
#[derive(Debug, Clone)]
pub struct StateChange {
    pending: Vec<String>,
    target: Vec<String>,
    failure: Vec<String>,
    timeout: Duration,
    backoff: BackoffConfig,
    cancellation: Option<CancellationToken>,
}

impl StateChange {
    /// An empty `target` means "wait until the resource is gone or leaves pending".
    pub fn new(pending: &[&str], target: &[&str], timeout: Duration) -> Self {
        Self {
            pending: pending.iter().map(|s| s.to_string()).collect(),
            target: target.iter().map(|s| s.to_string()).collect(),
            failure: Vec::new(),
            timeout,
            backoff: BackoffConfig::default(),
            cancellation: None,
        }
    }

    /// States that fail the wait even when `target` is empty
    pub fn with_failure(mut self, states: &[&str]) -> Self {
        self.failure = states.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_backoff(mut self, backoff: BackoffConfig) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }

    pub fn failure(&self) -> &[String] {
        &self.failure
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn classify(&self, state: &str) -> PollState {
        if self.target.iter().any(|t| t == state) {
            PollState::Target
        } else if self.failure.iter().any(|f| f == state) {
            PollState::Failure
        } else if self.pending.iter().any(|p| p == state) {
            PollState::Pending
        } else if self.target.is_empty() {
            PollState::Target
        } else {
            PollState::Failure
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Poll until the resource reaches a target state.
    ///
    /// Returns `Ok(Some(payload))` on a target state and `Ok(None)` when the
    /// resource is gone and no target was requested.
    pub async fn wait_for_state<A: StatusAdapter>(
        &self,
        adapter: &A,
    ) -> std::result::Result<Option<A::Output>, WaitError<A::Output>> {
        let deadline = Instant::now() + self.timeout.min(MAX_WAIT);
        let request = adapter.build_request();

        let mut attempt: u32 = 0;
        let mut not_found: u32 = 0;
        let mut last_state: Option<String> = None;
        let mut last_payload: Option<A::Output> = None;
        let mut last_error: Option<String> = None;

        loop {
            if self.is_cancelled() {
                return Err(WaitError::Cancelled {
                    last_state,
                    payload: last_payload,
                });
            }

            let observation = match tokio::time::timeout_at(deadline, adapter.query(&request)).await
            {
                Ok(observation) => observation,
                Err(_) => {
                    return Err(self.timeout_error(last_state, last_payload, last_error));
                }
            };

            match observation {
                Ok(Some(output)) => {
                    not_found = 0;
                    let state = adapter.extract_state(&output);
                    debug!(state = %state, attempt = attempt, "observed state");

                    match self.classify(&state) {
                        PollState::Target => return Ok(Some(output)),
                        PollState::Failure => {
                            let reason = adapter.failure_reason(&output);
                            return Err(WaitError::UnexpectedState {
                                state,
                                expected: self.target.clone(),
                                reason,
                                payload: output,
                            });
                        }
                        PollState::Pending => {
                            last_state = Some(state);
                            last_payload = Some(output);
                        }
                    }
                }
                Ok(None) => {
                    if self.target.is_empty() {
                        return Ok(None);
                    }
                    not_found += 1;
                    if not_found > self.backoff.not_found_checks {
                        return Err(WaitError::NotFound { checks: not_found });
                    }
                    debug!(checks = not_found, "resource not found yet");
                }
                Err(err) if adapter.is_transient_error(&err) => {
                    warn!(error = %err, attempt = attempt, "transient error while polling");
                    last_error = Some(err.to_string());
                }
                Err(err) => return Err(WaitError::Probe(err)),
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(self.timeout_error(last_state, last_payload, last_error));
            }

            let delay = Duration::from_millis(self.backoff.delay_for_attempt(attempt))
                .min(deadline - now);
            attempt = attempt.saturating_add(1);

            match &self.cancellation {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            return Err(WaitError::Cancelled {
                                last_state,
                                payload: last_payload,
                            });
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
                None => tokio::time::sleep(delay).await,
            }
        }
    }

    fn timeout_error<T>(
        &self,
        last_state: Option<String>,
        payload: Option<T>,
        last_error: Option<String>,
    ) -> WaitError<T> {
        WaitError::Timeout {
            expected: self.target.clone(),
            last_state,
            timeout: self.timeout,
            last_error,
            payload,
        }
    }
}
