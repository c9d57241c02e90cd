use log::warn;

use crate::errors::{ProviderError, TranslationError};
use crate::providers::Provider;
use crate::subtitle_processor::DialogueEntry;

// @module: Translation adapter over a chat-completion provider

/// Translation service that turns one batch of dialogue entries into their
/// translated counterparts through a single remote call
pub struct TranslationService<P: Provider> {
    // @field: Provider implementation
    provider: P,

    // @field: Instruction prepended to every prompt
    prompt: String,
}

impl<P: Provider> TranslationService<P> {
    /// Create a new translation service around a provider
    pub fn new(provider: P, prompt: impl Into<String>) -> Self {
        Self {
            provider,
            prompt: prompt.into(),
        }
    }

    /// Build the prompt for one batch: the instruction line followed by the
    /// batch's dialogue texts, one per line
    pub fn build_prompt(&self, batch: &[DialogueEntry]) -> String {
        let texts: Vec<&str> = batch.iter().map(|entry| entry.text.as_str()).collect();
        format!("{}\n{}", self.prompt, texts.join("\n"))
    }

    /// Translate one batch through a single request/response round trip.
    ///
    /// The response content is split on newlines, trimmed, and blank lines
    /// dropped; translated line `i` pairs with record `i`. When the model
    /// answers with fewer lines than records, the trailing records of the
    /// batch are dropped from the result — a lossy degradation the caller
    /// accepts, logged as a warning. Excess lines are ignored.
    pub async fn translate_batch(
        &self,
        batch: &[DialogueEntry],
    ) -> Result<Vec<DialogueEntry>, TranslationError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = self.build_prompt(batch);
        let content = self.provider.complete(&prompt).await?;

        let translated_lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if translated_lines.is_empty() {
            return Err(ProviderError::EmptyResponse.into());
        }

        if translated_lines.len() < batch.len() {
            warn!(
                "Response carried {} lines for {} entries, dropping the trailing {}",
                translated_lines.len(),
                batch.len(),
                batch.len() - translated_lines.len()
            );
        }

        let mut translated_entries = Vec::with_capacity(translated_lines.len().min(batch.len()));
        for (entry, line) in batch.iter().zip(translated_lines) {
            let translated = entry.with_translated_text(line);
            if translated.override_tag_count() != entry.override_tag_count() {
                warn!(
                    "Override tag count changed in translation of {:?} ({} -> {})",
                    entry.text,
                    entry.override_tag_count(),
                    translated.override_tag_count()
                );
            }
            translated_entries.push(translated);
        }

        Ok(translated_entries)
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Test the connection to the underlying provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }
}
