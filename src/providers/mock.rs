/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds, echoing the subtitle lines
 * - `MockProvider::failing()` - Always fails with a transport error
 * - `MockProvider::truncated(n)` - Answers with only the first n lines
 * - `MockProvider::flaky(n)` - Fails the first n calls, then succeeds
 * - `MockProvider::with_response(s)` - Answers with a canned response
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with one translated line per subtitle line
    Working,
    /// Always fails with a transport error
    Failing,
    /// Returns whitespace-only content
    Empty,
    /// Returns only the first `keep` translated lines
    Truncated { keep: usize },
    /// Fails the first `failures` calls, then behaves like Working
    Flaky { failures: usize },
}

/// Mock provider for exercising the translation pipeline without a network
///
/// The working behaviors assume the prompt layout built by the translation
/// service: an instruction on the first line, then one subtitle text per line.
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of complete() calls received
    request_count: Arc<AtomicUsize>,
    /// Canned response returned verbatim (overrides echoing)
    canned_response: Option<String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            canned_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns whitespace-only responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that answers with only the first `keep` lines
    pub fn truncated(keep: usize) -> Self {
        Self::new(MockBehavior::Truncated { keep })
    }

    /// Create a mock that fails `failures` times before succeeding
    pub fn flaky(failures: usize) -> Self {
        Self::new(MockBehavior::Flaky { failures })
    }

    /// Create a working mock that answers with a canned response
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Working,
            request_count: Arc::new(AtomicUsize::new(0)),
            canned_response: Some(response.into()),
        }
    }

    /// Number of complete() calls this mock has received
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Echo the prompt's subtitle lines (everything after the instruction
    /// line) with a translation marker, keeping at most `keep` lines
    fn echo_translation(prompt: &str, keep: usize) -> String {
        prompt
            .lines()
            .skip(1)
            .take(keep)
            .map(|line| format!("[TRANSLATED] {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let call_number = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("mock transport failure".to_string()))
            }
            MockBehavior::Flaky { failures } if call_number <= failures => {
                Err(ProviderError::ApiError {
                    status_code: 429,
                    message: "mock rate limit".to_string(),
                })
            }
            MockBehavior::Empty => Ok("   \n  ".to_string()),
            MockBehavior::Truncated { keep } => Ok(Self::echo_translation(prompt, keep)),
            MockBehavior::Working | MockBehavior::Flaky { .. } => {
                if let Some(response) = &self.canned_response {
                    Ok(response.clone())
                } else {
                    Ok(Self::echo_translation(prompt, usize::MAX))
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("mock transport failure".to_string()))
            }
            _ => Ok(()),
        }
    }
}
