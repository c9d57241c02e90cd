/*!
 * Provider implementations for the remote translation call.
 *
 * This module contains the client for OpenAI-compatible chat-completion
 * endpoints and a mock provider used by the test suite.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for chat-completion providers
///
/// The translation pipeline only needs one capability from a provider: turn a
/// prompt into the response's main text. Keeping the seam this narrow lets
/// tests drive the retry controller with a fake transport.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a prompt and return the response's main text content
    ///
    /// # Arguments
    /// * `prompt` - The full user message to submit
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw text content or an error
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod openai;
pub mod mock;
