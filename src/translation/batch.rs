use crate::errors::ConfigError;
use crate::subtitle_processor::DialogueEntry;

// @module: Batching of dialogue entries

/// Split entries into consecutive, non-overlapping batches of `size`.
///
/// The last batch may be shorter. Order is preserved and nothing is filtered,
/// so the concatenation of the batches reproduces the input exactly.
pub fn split_into_batches(
    entries: &[DialogueEntry],
    size: usize,
) -> Result<Vec<Vec<DialogueEntry>>, ConfigError> {
    if size == 0 {
        return Err(ConfigError::InvalidBatchSize);
    }

    Ok(entries.chunks(size).map(<[DialogueEntry]>::to_vec).collect())
}
