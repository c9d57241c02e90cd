use std::time::Duration;
use log::warn;

use crate::errors::TranslationError;
use crate::providers::Provider;
use crate::subtitle_processor::DialogueEntry;
use crate::translation::core::TranslationService;

// @module: Bounded retries per batch and inter-batch pacing

/// Outcome of a single translation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The remote call produced a usable translated batch
    Success,
    /// The remote call failed (transport, non-2xx, or empty response)
    Failure,
}

/// State of the retry loop for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// Attempts remain; `remaining` counts the ones still allowed
    Attempting {
        /// Attempts still allowed, including the one about to run
        remaining: u32,
    },
    /// The batch translated successfully
    Succeeded,
    /// The budget ran out without a success
    Exhausted,
}

impl RetryState {
    /// Initial state for a fresh batch with the given attempt budget
    pub fn start(budget: u32) -> Self {
        if budget == 0 {
            RetryState::Exhausted
        } else {
            RetryState::Attempting { remaining: budget }
        }
    }

    /// Pure transition function: `(state, outcome) -> next state`.
    /// Terminal states absorb every outcome.
    pub fn advance(self, outcome: AttemptOutcome) -> Self {
        match (self, outcome) {
            (RetryState::Attempting { .. }, AttemptOutcome::Success) => RetryState::Succeeded,
            (RetryState::Attempting { remaining }, AttemptOutcome::Failure) => {
                if remaining <= 1 {
                    RetryState::Exhausted
                } else {
                    RetryState::Attempting {
                        remaining: remaining - 1,
                    }
                }
            }
            (terminal, _) => terminal,
        }
    }
}

/// Retry budget applied to every batch
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum attempts per batch
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

/// Pacing applied between consecutive successful batches
///
/// Disabled pacing (or a zero delay, as the tests use) removes the suspension
/// entirely for self-hosted backends without request quotas.
#[derive(Debug, Clone, Copy)]
pub struct RatePacing {
    /// Whether the delay is applied at all
    enabled: bool,
    /// Minimum delay between successful remote calls
    delay: Duration,
}

impl RatePacing {
    /// Create a pacing policy from configuration values
    pub fn new(enabled: bool, delay_ms: u64) -> Self {
        Self {
            enabled,
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Pacing policy that never suspends
    pub fn disabled() -> Self {
        Self::new(false, 0)
    }

    /// Suspend for the configured delay, once per successful batch
    pub async fn pause(&self) {
        if self.enabled && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Drive one batch through the translation service with bounded retries.
///
/// Every failed attempt is logged with its count; when the budget runs out
/// the error is fatal for the whole file, not just this batch.
pub async fn translate_with_retry<P: Provider>(
    service: &TranslationService<P>,
    batch: &[DialogueEntry],
    batch_index: usize,
    policy: &RetryPolicy,
) -> Result<Vec<DialogueEntry>, TranslationError> {
    let mut state = RetryState::start(policy.max_attempts);
    let mut attempts = 0u32;

    while let RetryState::Attempting { .. } = state {
        attempts += 1;
        match service.translate_batch(batch).await {
            Ok(translated) => return Ok(translated),
            Err(e) => {
                warn!(
                    "Translation attempt {} of {} failed for batch {}: {}",
                    attempts,
                    policy.max_attempts,
                    batch_index + 1,
                    e
                );
                state = state.advance(AttemptOutcome::Failure);
            }
        }
    }

    Err(TranslationError::RetryExhausted {
        batch_index,
        attempts,
    })
}
