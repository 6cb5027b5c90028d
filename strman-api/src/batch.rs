//! Batch conversion
//!
//! Each conversion owns its scan state, so a batch can be spread across the
//! rayon pool without synchronization. Batches smaller than
//! [`PARALLEL_THRESHOLD`] run sequentially.

use crate::converter::Converter;

/// Minimum batch size converted in parallel
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Convert every source with `converter`, preserving order
pub fn convert_batch<S>(converter: &Converter, sources: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        if sources.len() >= PARALLEL_THRESHOLD {
            tracing::debug!(
                items = sources.len(),
                threads = rayon::current_num_threads(),
                "converting batch in parallel"
            );
            return sources
                .par_iter()
                .map(|source| converter.convert(source.as_ref()))
                .collect();
        }
    }

    tracing::debug!(items = sources.len(), "converting batch sequentially");
    sources
        .iter()
        .map(|source| converter.convert(source.as_ref()))
        .collect()
}
