/*!
 * # asstran - AI-powered ASS subtitle translator
 *
 * A Rust library for translating Advanced SubStation Alpha subtitle files
 * with chat-completion APIs while preserving timing, styling, and inline
 * override tags.
 *
 * ## Features
 *
 * - Parse the [Events] block of .ass files into addressable dialogue entries
 * - Batch entries for remote translation calls
 * - Bounded retries per batch with inter-batch rate-limit pacing
 * - Positionally aligned reassembly of the translated file
 * - Works with the public OpenAI API or self-hosted compatible servers
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: ASS dialogue parsing and reassembly
 * - `translation`: the translation pipeline:
 *   - `translation::batch`: batching of dialogue entries
 *   - `translation::core`: the adapter over a chat-completion provider
 *   - `translation::retry`: retry state machine and pacing
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `providers`: Client implementations for remote endpoints:
 *   - `providers::openai`: OpenAI-compatible API client
 *   - `providers::mock`: scripted provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod subtitle_processor;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{ConfigError, ProviderError, SubtitleError, TranslationError};
pub use subtitle_processor::{AssScript, DialogueEntry};
pub use translation::TranslationService;
