/*!
 * Error types for the asstran application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the translation API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The API answered but carried no usable text content
    #[error("API response contained no usable text content")]
    EmptyResponse,
}

/// Errors that can occur while parsing subtitle files
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Input file does not contain an [Events] section
    #[error("invalid ASS input: no [Events] section found")]
    MissingEventsSection,

    /// [Events] section exists but has no field definition line
    #[error("invalid ASS input: [Events] section has no Format line")]
    MissingFormatLine,
}

/// Errors that can occur while validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Batch size must be a positive integer
    #[error("batch size must be greater than zero")]
    InvalidBatchSize,

    /// API key is mandatory for the remote translation call
    #[error("translation API key is required")]
    MissingApiKey,

    /// Endpoint could not be parsed as a URL
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Retry budget exhausted for a batch; fatal for the whole file
    #[error("translation failed for batch {batch_index} after {attempts} attempts")]
    RetryExhausted {
        /// Zero-based index of the failing batch
        batch_index: usize,
        /// Number of attempts made before giving up
        attempts: u32,
    },
}

