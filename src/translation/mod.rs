/*!
 * Translation pipeline building blocks.
 *
 * This module contains the batching, adapter, and retry layers of the
 * pipeline. It is split into several submodules:
 *
 * - `batch`: grouping dialogue entries into fixed-size batches
 * - `core`: the adapter that turns one batch into translated entries
 * - `retry`: bounded retries per batch and inter-batch pacing
 */

// Re-export main types for easier usage
pub use self::batch::split_into_batches;
pub use self::core::TranslationService;
pub use self::retry::{
    AttemptOutcome, RatePacing, RetryPolicy, RetryState, translate_with_retry,
};

// Submodules
pub mod batch;
pub mod core;
pub mod retry;
