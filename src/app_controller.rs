use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::file_utils::FileManager;
use crate::providers::Provider;
use crate::providers::openai::OpenAI;
use crate::subtitle_processor::{AssScript, DialogueEntry};
use crate::translation::{
    RatePacing, RetryPolicy, TranslationService, split_into_batches, translate_with_retry,
};

// @module: Application controller for subtitle translation

/// Main application controller driving parse -> batch -> translate -> assemble
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Process an input path: a single .ass file, or a directory in which
    /// every .ass file is translated independently
    pub async fn run(&self, input_path: &Path) -> Result<()> {
        if FileManager::dir_exists(input_path) {
            let files = FileManager::find_ass_files(input_path)?;
            if files.is_empty() {
                return Err(anyhow!("No .ass files found in {:?}", input_path));
            }

            info!("Found {} subtitle file(s) in {:?}", files.len(), input_path);
            for file in &files {
                self.translate_file(file).await?;
            }
            Ok(())
        } else if FileManager::file_exists(input_path) {
            if !FileManager::is_ass_file(input_path) {
                return Err(anyhow!("Only .ass files are supported: {:?}", input_path));
            }
            self.translate_file(input_path).await?;
            Ok(())
        } else {
            Err(anyhow!("Input path does not exist: {:?}", input_path))
        }
    }

    /// Translate one file with the configured remote provider
    pub async fn translate_file(&self, input_file: &Path) -> Result<PathBuf> {
        let provider = OpenAI::new(
            self.config.api_key.clone(),
            self.config.endpoint.clone(),
            self.config.model.clone(),
        )
        .with_temperature(self.config.temperature);
        let service = TranslationService::new(provider, self.config.prompt.clone());

        self.translate_file_with_service(input_file, &service).await
    }

    /// Translate one file through the given service.
    ///
    /// The output file is only written after every batch succeeded; a fatal
    /// error leaves no partial artifact behind.
    pub async fn translate_file_with_service<P: Provider>(
        &self,
        input_file: &Path,
        service: &TranslationService<P>,
    ) -> Result<PathBuf> {
        let content = FileManager::read_to_string(input_file)?;
        let script = AssScript::parse(&content)?;
        info!(
            "Parsed {} dialogue entries from {:?}",
            script.entries.len(),
            input_file
        );

        let batches = split_into_batches(&script.entries, self.config.batch_size)?;
        let policy = RetryPolicy {
            max_attempts: self.config.retry_count,
        };
        let pacing = RatePacing::new(
            self.config.rate_limit_enabled,
            self.config.rate_limit_delay_ms,
        );

        let progress_bar = ProgressBar::new(batches.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);

        let translated = Self::translate_batches(service, &batches, &policy, &pacing, |done, total| {
            progress_bar.set_position(done as u64);
            info!("Finished batch {} / {}", done, total);
        })
        .await?;

        progress_bar.finish_with_message("translation complete");

        let output = AssScript::assemble(&script.header, &translated);
        let output_path = FileManager::translated_output_path(input_file);
        FileManager::write_to_file(&output_path, &output)?;
        info!("All done, check your file at {:?}", output_path);

        Ok(output_path)
    }

    /// Drive every batch sequentially through retry-controlled translation.
    ///
    /// The result container is owned here and only here; batches append to it
    /// in order. The pacing delay runs once per successful batch and is
    /// skipped after the last one.
    pub async fn translate_batches<P, F>(
        service: &TranslationService<P>,
        batches: &[Vec<DialogueEntry>],
        policy: &RetryPolicy,
        pacing: &RatePacing,
        progress_callback: F,
    ) -> Result<Vec<DialogueEntry>, TranslationError>
    where
        P: Provider,
        F: Fn(usize, usize),
    {
        let total_batches = batches.len();
        let mut translated_entries =
            Vec::with_capacity(batches.iter().map(Vec::len).sum());

        for (batch_index, batch) in batches.iter().enumerate() {
            let translated = translate_with_retry(service, batch, batch_index, policy).await?;
            translated_entries.extend(translated);
            progress_callback(batch_index + 1, total_batches);

            if batch_index + 1 < total_batches {
                pacing.pause().await;
            }
        }

        Ok(translated_entries)
    }
}
